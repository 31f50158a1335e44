//! # EXIF 元数据模块
//!
//! 读取图像文件头中的 EXIF 字段。CTF 题目常把线索藏在作者、注释等字段中。

use crate::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 一条 EXIF 字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifEntry {
    /// 字段名，如 `Make`、`DateTimeOriginal`。
    pub tag: String,
    /// 所属 IFD，主图为 `primary`，缩略图为 `thumbnail`。
    pub ifd: String,
    /// 带单位的可读值。
    pub value: String,
}

/// 读取图像中的所有 EXIF 字段。
///
/// 图像不含 EXIF 数据时返回空列表，而不是错误。
///
/// # Errors
///
/// 无法打开文件，或 EXIF 数据本身已损坏时返回错误。
pub fn read_exif(path: &Path) -> Result<Vec<ExifEntry>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(container)) => {
            log::debug!("no EXIF segment in {} ({container})", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let entries = exif
        .fields()
        .map(|field| ExifEntry {
            tag: field.tag.to_string(),
            ifd: field.ifd_num.to_string(),
            value: field.display_value().with_unit(&exif).to_string(),
        })
        .collect::<Vec<_>>();

    log::debug!("read {} EXIF fields from {}", entries.len(), path.display());
    Ok(entries)
}
