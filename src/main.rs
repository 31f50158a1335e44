use clap::Parser;

use lsb_text::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_exif, handle_hide, handle_planes, handle_recover},
};

/// 程序的主入口点
///
/// 负责初始化日志、解析命令行参数，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 日志级别由 RUST_LOG 控制，--verbose 时至少输出 debug 级别
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
        Commands::Capacity(args) => handle_capacity(args),
        Commands::Planes(args) => handle_planes(args),
        Commands::Exif(args) => handle_exif(args),
    }
}
