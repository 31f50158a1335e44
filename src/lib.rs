//! # lsb_text 库
//!
//! 本库包含 LSB 文本隐写工具的核心逻辑：容量计算、编码、解码、无损导出、位平面视图以及 EXIF 元数据读取。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod export;
pub mod handler;
pub mod metadata;
pub mod session;
pub mod steganography;
