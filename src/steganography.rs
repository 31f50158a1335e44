//! # LSB 隐写核心模块
//!
//! 将文本的 UTF-8 字节逐位写入 RGBA 图像中 R、G、B 通道的最低有效位，
//! 并在末尾追加一个 0x00 结束标记。Alpha 通道始终保持不变。
//!
//! 位流按像素顺序排列，每个像素依次为 R、G、B，每个字节高位在前。

use crate::constants::{
    BITS_PER_BYTE, CHANNELS_PER_PIXEL, MAX_DECODE_BITS, PAYLOAD_CHANNELS, TERMINATOR,
};
use crate::error::{Result, StegoError};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// 读取任意受支持格式的图像文件，并统一转换为 8 位 RGBA 像素缓冲区。
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?.to_rgba8();
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// 计算给定尺寸的图像最多能隐藏多少字节 (包含结束标记)。
///
/// 每个像素的 R、G、B 各承载 1 位，因此容量为 `⌊W × H × 3 / 8⌋`。
pub fn capacity(width: u32, height: u32) -> usize {
    width as usize * height as usize * PAYLOAD_CHANNELS / BITS_PER_BYTE
}

/// 隐藏 `message` 所需的字节数：UTF-8 编码长度加上结束标记。
pub fn required_space(message: &str) -> usize {
    message.len() + 1
}

/// 将 `message` 隐藏到 `image` 的副本中并返回该副本。
///
/// 只有前 `(len + 1) × 8` 个 RGB 通道值的最低位会被改写，其余字节保持原样。
///
/// # Errors
///
/// 若消息加结束标记超出图像容量，返回 [`StegoError::CapacityExceeded`]。
/// 此检查在复制和写入之前完成，失败时不会产生任何部分写入。
pub fn encode(image: &RgbaImage, message: &str) -> Result<RgbaImage> {
    let available = capacity(image.width(), image.height());
    let required = required_space(message);
    if required > available {
        return Err(StegoError::CapacityExceeded {
            required,
            available,
        });
    }

    if message.as_bytes().contains(&TERMINATOR) {
        log::warn!("message contains a NUL byte, decoding will stop there");
    }

    let mut output = image.clone();
    let lanes: &mut [u8] = &mut output;

    let bits = message
        .as_bytes()
        .iter()
        .chain(std::iter::once(&TERMINATOR))
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1));

    lanes
        .chunks_exact_mut(CHANNELS_PER_PIXEL)
        .flat_map(|pixel| pixel.iter_mut().take(PAYLOAD_CHANNELS))
        .zip(bits)
        .for_each(|(lane, bit)| *lane = (*lane & 0xFE) | bit);

    log::debug!(
        "embedded {} bits ({required} of {available} bytes)",
        required * BITS_PER_BYTE
    );
    Ok(output)
}

/// 从图像中恢复隐藏的文本，最多扫描 [`MAX_DECODE_BITS`] 位。
pub fn decode(image: &RgbaImage) -> String {
    decode_with_limit(image, MAX_DECODE_BITS)
}

/// 按与 [`encode`] 相同的顺序读取 RGB 最低位，直到遇到结束标记或扫描满 `max_bits` 位。
///
/// 返回结束标记之前的字节 (按 UTF-8 解码，非法序列替换为 U+FFFD)。
/// 以下情况返回空字符串而非错误：
/// * 第一个字节就是结束标记；
/// * 在上限内没有找到结束标记；
/// * 可用位数不足 8 位。
pub fn decode_with_limit(image: &RgbaImage, max_bits: usize) -> String {
    let lanes: &[u8] = image;

    let bits = lanes
        .chunks_exact(CHANNELS_PER_PIXEL)
        .flat_map(|pixel| pixel.iter().take(PAYLOAD_CHANNELS))
        .map(|lane| lane & 1)
        .take(max_bits);

    let mut message = Vec::new();
    let mut current = 0u8;
    let mut filled = 0;

    for bit in bits {
        current = (current << 1) | bit;
        filled += 1;
        if filled < BITS_PER_BYTE {
            continue;
        }
        if current == TERMINATOR {
            log::debug!("terminator found after {} bytes", message.len());
            return String::from_utf8_lossy(&message).into_owned();
        }
        message.push(current);
        current = 0;
        filled = 0;
    }

    log::debug!("no terminator within {max_bits} bits");
    String::new()
}

/// 位平面视图中可选择的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

/// 将 `channel` 通道的第 `bit` 位 (0 为最低位) 渲染为黑白图像。
///
/// 该位为 1 的像素输出白色，为 0 输出黑色，输出图像完全不透明。
/// `bit` 超过 7 时所有像素均为黑色。
pub fn bit_plane(image: &RgbaImage, channel: Channel, bit: u8) -> RgbaImage {
    let index = channel.index();
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let value = image.get_pixel(x, y).0[index];
        if value.checked_shr(u32::from(bit)).unwrap_or(0) & 1 == 1 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}
