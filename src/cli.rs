//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::steganography::Channel;
use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在图像的 RGB 通道中隐藏或恢复文本，
/// 并可查看单个通道的位平面。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具。文本以 0x00 结尾逐位写入 R、G、B 通道的最低位，结果只会保存为无损格式 (PNG, BMP, TIFF, QOI, WebP)。"
)]
pub struct Cli {
    /// 输出调试日志 (等同于 RUST_LOG=debug)。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在图像中隐藏文本，结果保存为无损格式。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 显示图像可隐藏的最大字节数。
    Capacity(CapacityArgs),

    /// 将某个通道的某一位渲染为黑白图像。
    Planes(PlanesArgs),

    /// 列出图像中的 EXIF 元数据。
    Exif(ExifArgs),
}

/// 'hide' 命令所需的参数。文本来源二选一：文件或直接给出的消息。
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["text", "message"])))]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (PNG, BMP, JPEG 等)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径 (UTF-8)。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 直接在命令行给出要隐藏的文本。
    #[arg(short, long)]
    pub message: Option<String>,

    /// 结果图像的输出路径，默认为同目录下的 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本的输出路径，默认为同目录下的 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要计算容量的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}

/// 'planes' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PlanesArgs {
    /// 要查看位平面的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要查看的通道。
    #[arg(short, long, value_enum, default_value_t = ChannelArg::Red)]
    pub channel: ChannelArg,

    /// 位序号，0 为最低有效位，7 为最高有效位。
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=7))]
    pub bit: u8,

    /// 输出路径，默认为同目录下的 `<文件名>_<通道>_<位>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'exif' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExifArgs {
    /// 要读取元数据的图像文件路径 (JPEG, PNG, TIFF, WebP 等)。
    #[arg(short, long)]
    pub image: PathBuf,
}

/// 命令行中可选的通道名称。
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelArg {
    Red,
    Green,
    Blue,
    Alpha,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Red => Channel::Red,
            ChannelArg::Green => Channel::Green,
            ChannelArg::Blue => Channel::Blue,
            ChannelArg::Alpha => Channel::Alpha,
        }
    }
}
