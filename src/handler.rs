//! # 命令处理逻辑模块
//!
//! 包含处理各个子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、驱动隐写会话以及向用户报告结果。

use crate::cli::{CapacityArgs, ExifArgs, HideArgs, PlanesArgs, RecoverArgs};
use crate::error::StegoError;
use crate::export;
use crate::metadata::read_exif;
use crate::session::Session;
use crate::steganography::{self, Channel, bit_plane, load_image};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 若目标文件已存在且未指定 `--force`，拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}\nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn read_image(path: &Path) -> Result<image::RgbaImage> {
    load_image(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 生成默认的恢复文本路径：同目录下的 `recovered_<文件名>.txt`。
fn recovered_path_for(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    image.with_file_name(format!("recovered_{stem}.txt"))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本、检查容量是否足够、隐藏文本，最后以无损格式写入目标图像文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件，或文本不是合法的 UTF-8。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像没有足够的空间来隐藏文本。
/// * 目标路径不是无损格式，或无法写入。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let message = match (&args.message, &args.text) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either --text or --message must be given."),
    };

    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| export::export_path_for(&args.image));
    ensure_writable(&dest, args.force)?;

    let mut session = Session::new();
    session.load(read_image(&args.image)?);

    match session.encode(&message) {
        Ok(_) => {}
        Err(StegoError::CapacityExceeded {
            required,
            available,
        }) => anyhow::bail!(
            "Not enough space in the image to hide the text. \nRequired: {} bytes, Available: {} bytes",
            required.to_string().red().bold(),
            available.to_string().green().bold()
        ),
        Err(e) => return Err(e.into()),
    }

    session.export(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 读取经过隐写的图像，恢复结束标记之前的文本并写入目标文本文件。
/// 未找到隐藏消息不视为错误，此时写入空文件并给出提示。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args
        .text
        .clone()
        .unwrap_or_else(|| recovered_path_for(&args.image));
    ensure_writable(&dest, args.force)?;

    let mut session = Session::new();
    session.load(read_image(&args.image)?);
    let message = session.decode()?;

    if message.is_empty() {
        println!(
            "{} {}",
            "No hidden message found in".yellow(),
            args.image.to_string_lossy().yellow().bold()
        );
    }

    fs::write(&dest, message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：输出图像尺寸和最大可隐藏字节数 (含结束标记)。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let image = read_image(&args.image)?;
    let bytes = steganography::capacity(image.width(), image.height());

    println!(
        "{}: {}x{} pixels, capacity {} bytes ({} bytes of text)",
        args.image.to_string_lossy().bold(),
        image.width(),
        image.height(),
        bytes.to_string().green().bold(),
        bytes.saturating_sub(1).to_string().green().bold()
    );
    Ok(())
}

/// 处理 'Planes' 命令：将指定通道的指定位渲染为黑白图像并保存。
///
/// # Errors
///
/// 无法读取输入图像、目标文件已存在且未指定 `--force`、
/// 或目标路径不是无损格式时返回错误。
pub fn handle_planes(args: PlanesArgs) -> Result<()> {
    let channel = Channel::from(args.channel);
    let dest = args.dest.clone().unwrap_or_else(|| {
        let stem = args
            .image
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_owned());
        args.image
            .with_file_name(format!("{stem}_{}_{}.png", channel.name(), args.bit))
    });
    ensure_writable(&dest, args.force)?;

    let image = read_image(&args.image)?;
    let plane = bit_plane(&image, channel, args.bit);

    export::save(&plane, &dest).with_context(|| {
        format!(
            "Unable to write bit plane image: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The {} bit {} plane has been saved: {}",
        channel.name(),
        args.bit,
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Exif' 命令：逐行列出图像中的 EXIF 字段。
///
/// 图像不含 EXIF 数据时只给出提示，不视为错误。
pub fn handle_exif(args: ExifArgs) -> Result<()> {
    let entries = read_exif(&args.image).with_context(|| {
        format!(
            "Unable to read EXIF metadata from: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    if entries.is_empty() {
        println!(
            "{} {}",
            "No EXIF data found in".yellow(),
            args.image.to_string_lossy().yellow().bold()
        );
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{} [{}]: {}",
            entry.tag.green().bold(),
            entry.ifd,
            entry.value
        );
    }
    Ok(())
}
