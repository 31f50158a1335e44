use image::{Rgb, RgbImage};
use lsb_text::{cli::ExifArgs, handler::handle_exif, metadata::read_exif};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// 生成一个不含 EXIF 的 JPEG 图像
fn create_plain_jpeg(path: &Path) {
    RgbImage::from_pixel(16, 16, Rgb([90, 120, 200]))
        .save(path)
        .expect("Failed to create test JPEG.");
}

/// 构造只含一个 `Make` 字段的 APP1 (Exif) 段
fn exif_segment(make: &str) -> Vec<u8> {
    let mut value = make.as_bytes().to_vec();
    value.push(0);

    // TIFF 头 (小端) + IFD0 (1 个字段) + 下一个 IFD 偏移 + 字符串数据
    let value_offset: u32 = 8 + 2 + 12 + 4;
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II*\0");
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x010Fu16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&(value.len() as u32).to_le_bytes());
    tiff.extend_from_slice(&value_offset.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(&value);

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    segment.extend_from_slice(&payload);
    segment
}

/// 生成一个带 EXIF `Make` 字段的 JPEG 图像：在 SOI 之后插入 APP1 段
fn create_jpeg_with_exif(path: &Path, make: &str) -> anyhow::Result<()> {
    create_plain_jpeg(path);
    let jpeg = fs::read(path)?;
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let mut tagged = jpeg[..2].to_vec();
    tagged.extend_from_slice(&exif_segment(make));
    tagged.extend_from_slice(&jpeg[2..]);
    fs::write(path, tagged)?;
    Ok(())
}

#[test]
fn test_jpeg_without_exif_is_empty() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("plain.jpg");
    create_plain_jpeg(&path);

    assert!(read_exif(&path)?.is_empty());
    handle_exif(ExifArgs { image: path })?;
    Ok(())
}

#[test]
fn test_jpeg_with_exif_lists_fields() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("tagged.jpg");
    create_jpeg_with_exif(&path, "CTFcam")?;

    let entries = read_exif(&path)?;
    let make = entries
        .iter()
        .find(|entry| entry.tag == "Make")
        .expect("Make field should be present");
    assert!(make.value.contains("CTFcam"), "value was {}", make.value);
    assert_eq!(make.ifd, "primary");

    handle_exif(ExifArgs { image: path })?;
    Ok(())
}

#[test]
fn test_exif_missing_file_is_error() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.jpg");

    assert!(read_exif(&path).is_err());
    assert!(handle_exif(ExifArgs { image: path }).is_err());
    Ok(())
}
