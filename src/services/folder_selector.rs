//! 文件夹选择服务 - 业务能力层
//!
//! 只负责"列出案件文件夹"能力：读取源目录下的直接子目录，可选按编号范围过滤

use crate::error::FilesystemError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;
use tracing::{debug, warn};

/// 名称开头的整数：可选前导空白、可选正负号，然后是 `0x` 十六进制或十进制数字
static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?)(?:0[xX]([0-9a-fA-F]*)|([0-9]+))").expect("leading integer pattern")
});

/// 列出源目录下的文件夹
///
/// # 参数
/// - `source_root`: 源目录
/// - `range_start`: 编号下限（含）
/// - `range_end`: 编号上限（含）
///
/// # 返回
/// 文件夹名称列表，顺序与目录读取顺序一致
pub async fn select_folders(
    source_root: &Path,
    range_start: Option<i64>,
    range_end: Option<i64>,
) -> Result<Vec<String>, FilesystemError> {
    let mut entries = fs::read_dir(source_root)
        .await
        .map_err(|e| FilesystemError::list_dir(source_root, e))?;

    let range = active_range(range_start, range_end);
    let mut folders = Vec::new();

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FilesystemError::list_dir(source_root, e))?
    {
        // file_type 不跟随符号链接，指向目录的链接不算文件夹
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| FilesystemError::metadata(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("跳过名称不是 UTF-8 的文件夹: {:?}", raw);
                continue;
            }
        };
        match range {
            Some((start, end)) if !in_range(&name, start, end) => {
                debug!("跳过范围外的文件夹: {}", name);
            }
            _ => folders.push(name),
        }
    }

    Ok(folders)
}

/// 只有两个边界都给出且都不为 0 时才启用范围过滤
///
/// NOTE: 边界为 0 或缺失时返回全部文件夹，而不是"从 0 开始过滤"。
/// 调用方传 `range_start = 0` 多半是想过滤，这里保留旧行为不做修改。
pub fn active_range(range_start: Option<i64>, range_end: Option<i64>) -> Option<(i64, i64)> {
    match (range_start, range_end) {
        (Some(start), Some(end)) if start != 0 && end != 0 => Some((start, end)),
        _ => None,
    }
}

/// 文件夹名开头的整数，解析不出或超出 i64 时返回 None
///
/// `0x` 开头按十六进制解析，`0x` 后面没有数字时视为解析不出
pub fn leading_integer(name: &str) -> Option<i64> {
    let caps = LEADING_INT.captures(name)?;
    let negative = &caps[1] == "-";
    let magnitude = match (caps.get(2), caps.get(3)) {
        (Some(hex), _) if hex.as_str().is_empty() => return None,
        (Some(hex), _) => i64::from_str_radix(hex.as_str(), 16).ok()?,
        (None, Some(dec)) => dec.as_str().parse::<i64>().ok()?,
        (None, None) => return None,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// 判断文件夹名是否落在 `[start, end]` 内
///
/// 名称必须以该整数的十进制形式开头，所以 "007" 和 " 5" 都不算
pub fn in_range(name: &str, start: i64, end: i64) -> bool {
    match leading_integer(name) {
        Some(num) => num >= start && num <= end && name.starts_with(&num.to_string()),
        None => false,
    }
}
