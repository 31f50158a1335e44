//! # 图像导出模块
//!
//! 隐写结果只能保存为无损格式，有损压缩会翻转刚写入的最低位。

use crate::error::{Result, StegoError};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// 根据路径扩展名确定导出格式，只接受无损格式。
///
/// # Errors
///
/// 扩展名缺失、无法识别或对应有损格式 (如 JPEG) 时返回 [`StegoError::LossyExportFormat`]。
pub fn lossless_format(path: &Path) -> Result<ImageFormat> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ImageFormat::from_extension(&extension) {
        Some(
            format @ (ImageFormat::Png
            | ImageFormat::Bmp
            | ImageFormat::Tiff
            | ImageFormat::Qoi
            | ImageFormat::WebP),
        ) => Ok(format),
        _ => Err(StegoError::LossyExportFormat(extension)),
    }
}

/// 为输入图像生成默认的导出路径：同目录下的 `doctored_<文件名>`。
///
/// 输入为无损格式时沿用原扩展名，否则改为 `.png`。
pub fn export_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());

    let extension = match lossless_format(input) {
        Ok(_) => input
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_else(|| "png".to_owned()),
        Err(_) => "png".to_owned(),
    };

    input.with_file_name(format!("doctored_{stem}.{extension}"))
}

/// 以无损格式将图像写入 `path`。格式检查在写文件之前完成。
pub fn save(image: &RgbaImage, path: &Path) -> Result<()> {
    let format = lossless_format(path)?;
    image.save_with_format(path, format)?;
    log::debug!("exported {} as {:?}", path.display(), format);
    Ok(())
}
