use clap::Parser;
use lsb_text::cli::{ChannelArg, Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_hide_requires_exactly_one_source() {
    let cli = Cli::try_parse_from(["lsb_text", "hide", "-i", "a.png", "-m", "flag{x}"])
        .expect("--message alone is valid");
    match cli.command {
        Commands::Hide(args) => {
            assert_eq!(args.message.as_deref(), Some("flag{x}"));
            assert_eq!(args.text, None);
            assert_eq!(args.dest, None);
            assert!(!args.force);
        }
        other => panic!("expected hide, got {other:?}"),
    }

    assert!(Cli::try_parse_from(["lsb_text", "hide", "-i", "a.png", "-t", "msg.txt"]).is_ok());
    assert!(Cli::try_parse_from(["lsb_text", "hide", "-i", "a.png"]).is_err());
    assert!(
        Cli::try_parse_from(["lsb_text", "hide", "-i", "a.png", "-t", "msg.txt", "-m", "hi"])
            .is_err()
    );
}

#[test]
fn test_planes_bit_range_and_defaults() {
    let cli = Cli::try_parse_from(["lsb_text", "planes", "-i", "a.png"]).expect("defaults");
    match cli.command {
        Commands::Planes(args) => {
            assert_eq!(args.channel, ChannelArg::Red);
            assert_eq!(args.bit, 0);
        }
        other => panic!("expected planes, got {other:?}"),
    }

    let cli = Cli::try_parse_from(["lsb_text", "planes", "-i", "a.png", "-c", "green", "-b", "7"])
        .expect("bit 7 is valid");
    match cli.command {
        Commands::Planes(args) => {
            assert_eq!(args.channel, ChannelArg::Green);
            assert_eq!(args.bit, 7);
        }
        other => panic!("expected planes, got {other:?}"),
    }

    assert!(Cli::try_parse_from(["lsb_text", "planes", "-i", "a.png", "-b", "8"]).is_err());
    assert!(Cli::try_parse_from(["lsb_text", "planes", "-i", "a.png", "-c", "purple"]).is_err());
}

#[test]
fn test_exif_and_global_verbose() {
    let cli = Cli::try_parse_from(["lsb_text", "exif", "-i", "photo.jpg", "-v"])
        .expect("exif with verbose");
    assert!(cli.verbose);
    match cli.command {
        Commands::Exif(args) => assert_eq!(args.image, PathBuf::from("photo.jpg")),
        other => panic!("expected exif, got {other:?}"),
    }

    assert!(Cli::try_parse_from(["lsb_text", "capacity"]).is_err());
}
