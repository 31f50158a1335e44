//! # 错误类型模块
//!
//! 库核心使用的类型化错误 (隐写、导出与元数据读取)。命令行层会将其包装进 `anyhow::Error` 并附加上下文。

use image::ImageError;

/// 隐写编码、解码、导出过程中可能出现的错误。
///
/// 注意：“未找到隐藏消息”不是错误，解码器此时返回空字符串。
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    /// 消息 (含结束标记) 超出了图像容量。不会写入任何数据。
    #[error("message needs {required} bytes but the image can only hold {available}")]
    CapacityExceeded { required: usize, available: usize },

    /// 在加载图像之前调用了需要图像的操作。
    #[error("no image loaded")]
    NoImageLoaded,

    /// 在成功编码之前请求导出。
    #[error("nothing to export, encode a message first")]
    NothingToExport,

    /// 导出路径对应的格式是有损格式或不受支持的格式，会破坏 LSB 数据。
    #[error("refusing to export as '{0}': only lossless formats (png, bmp, tiff, qoi, webp) keep the hidden bits intact")]
    LossyExportFormat(String),

    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StegoError>;
