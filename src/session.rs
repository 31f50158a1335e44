//! # 会话状态模块
//!
//! 一次隐写会话持有当前图像、其容量以及最近一次的编码/解码结果。
//! 加载新图像时，所有派生状态都会被丢弃。

use crate::error::{Result, StegoError};
use crate::export;
use crate::steganography;
use image::RgbaImage;
use std::path::Path;

/// 会话所处的阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    ImageLoaded,
    Encoded,
    Exported,
    Decoded,
}

#[derive(Debug)]
pub struct Session {
    image: Option<RgbaImage>,
    capacity: usize,
    encoded: Option<RgbaImage>,
    decoded: Option<String>,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            image: None,
            capacity: 0,
            encoded: None,
            decoded: None,
            state: SessionState::Idle,
        }
    }

    /// 载入新图像，重新计算容量并丢弃之前的编码和解码结果。
    pub fn load(&mut self, image: RgbaImage) {
        self.capacity = steganography::capacity(image.width(), image.height());
        self.image = Some(image);
        self.encoded = None;
        self.decoded = None;
        self.state = SessionState::ImageLoaded;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn image(&self) -> Result<&RgbaImage> {
        self.image.as_ref().ok_or(StegoError::NoImageLoaded)
    }

    /// 当前图像可隐藏的字节数 (含结束标记)。
    pub fn capacity(&self) -> Result<usize> {
        self.image()?;
        Ok(self.capacity)
    }

    /// 将消息隐藏到当前图像的副本中。原图像保持不变，可以再次解码或重新编码。
    ///
    /// # Errors
    ///
    /// * 尚未加载图像时返回 [`StegoError::NoImageLoaded`]。
    /// * 消息过长时返回 [`StegoError::CapacityExceeded`]，此前的编码结果会被清除，
    ///   会话回到 [`SessionState::ImageLoaded`]。
    pub fn encode(&mut self, message: &str) -> Result<&RgbaImage> {
        self.encoded = None;
        match steganography::encode(self.image()?, message) {
            Ok(encoded) => {
                self.state = SessionState::Encoded;
                Ok(&*self.encoded.insert(encoded))
            }
            Err(e) => {
                self.state = SessionState::ImageLoaded;
                Err(e)
            }
        }
    }

    /// 从当前已加载的图像 (而非编码结果) 中恢复隐藏文本。
    pub fn decode(&mut self) -> Result<&str> {
        let message = steganography::decode(self.image()?);
        self.state = SessionState::Decoded;
        Ok(self.decoded.insert(message).as_str())
    }

    /// 将最近一次的编码结果以无损格式保存到 `path`。
    ///
    /// # Errors
    ///
    /// * 尚未成功编码时返回 [`StegoError::NothingToExport`]。
    /// * `path` 不是无损格式时返回 [`StegoError::LossyExportFormat`]。
    pub fn export(&mut self, path: &Path) -> Result<()> {
        let encoded = self.encoded.as_ref().ok_or(StegoError::NothingToExport)?;
        export::save(encoded, path)?;
        self.state = SessionState::Exported;
        Ok(())
    }
}
