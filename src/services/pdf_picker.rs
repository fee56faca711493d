//! 最新 PDF 选择服务 - 业务能力层
//!
//! 只负责"在一个文件夹里找出最后修改的 PDF"能力，不关心复制和日志

use crate::error::FilesystemError;
use crate::models::{has_pdf_extension, FileEntry};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 列出文件夹中的 PDF 文件
///
/// 只保留普通文件（不跟随符号链接），结果按文件名排序
pub async fn list_pdf_files(folder_path: &Path) -> Result<Vec<FileEntry>, FilesystemError> {
    let mut entries = fs::read_dir(folder_path)
        .await
        .map_err(|e| FilesystemError::list_dir(folder_path, e))?;

    let mut pdf_files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FilesystemError::list_dir(folder_path, e))?
    {
        // 名称只用于判断扩展名和排序，复制时用的是原始路径
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if !has_pdf_extension(&name) {
            continue;
        }

        let file_type = entry
            .file_type()
            .await
            .map_err(|e| FilesystemError::metadata(&path, e))?;
        if !file_type.is_file() {
            continue;
        }

        let modified = entry
            .metadata()
            .await
            .and_then(|m| m.modified())
            .map_err(|e| FilesystemError::metadata(&path, e))?;

        pdf_files.push(FileEntry::new(name, path, modified));
    }

    pdf_files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pdf_files)
}

/// 从候选文件中选出修改时间最新的一个
///
/// 只有严格更新的文件才会替换当前结果，修改时间相同时保留先出现的那个
pub fn latest_file(files: Vec<FileEntry>) -> Option<FileEntry> {
    files.into_iter().fold(None, |latest, file| match latest {
        Some(current) if file.modified <= current.modified => Some(current),
        _ => Some(file),
    })
}

/// 找出文件夹中最后修改的 PDF 文件
///
/// # 返回
/// - `Ok(Some(entry))`: 找到的文件
/// - `Ok(None)`: 文件夹中没有 PDF
pub async fn pick_latest_pdf(folder_path: &Path) -> Result<Option<FileEntry>, FilesystemError> {
    let pdf_files = list_pdf_files(folder_path).await?;
    debug!(
        "{} 中共有 {} 个 PDF 文件",
        folder_path.display(),
        pdf_files.len()
    );
    Ok(latest_file(pdf_files))
}
