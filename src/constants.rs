/// 每个像素在 RGBA 缓冲区中占用的字节数。
pub const CHANNELS_PER_PIXEL: usize = 4;

/// 每个像素中承载隐写数据的通道数 (R, G, B)。
/// Alpha 通道从不写入，以保证透明度不变。
pub const PAYLOAD_CHANNELS: usize = 3;

pub const BITS_PER_BYTE: usize = 8;

/// 消息结束标记。
/// 消息中出现的 0x00 字节与结束标记无法区分，解码会在此处截断。
pub const TERMINATOR: u8 = 0x00;

/// 解码时最多扫描的位数 (约 100,000 字节)。
/// 超过此上限仍未遇到结束标记时，视为图像中没有隐藏消息。
pub const MAX_DECODE_BITS: usize = 800_000;
