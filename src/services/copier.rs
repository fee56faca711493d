//! 复制服务 - 业务能力层
//!
//! 只负责"把选中的 PDF 复制为 `<文件夹名>.pdf`"能力

use crate::config::CopyStrategy;
use crate::error::FilesystemError;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

/// 目标文件路径：`output_dir/<folder_name>.pdf`
pub fn destination_path(output_dir: &Path, folder_name: &str) -> PathBuf {
    output_dir.join(format!("{}.pdf", folder_name))
}

/// 复制文件到输出目录，已存在的同名文件会被覆盖
///
/// # 参数
/// - `source`: 源文件
/// - `folder_name`: 源文件所在文件夹名，用作目标文件名
/// - `output_dir`: 输出目录
/// - `strategy`: 复制方式
///
/// # 返回
/// 目标文件路径
pub async fn copy_to_output(
    source: &Path,
    folder_name: &str,
    output_dir: &Path,
    strategy: CopyStrategy,
) -> Result<PathBuf, FilesystemError> {
    let destination = destination_path(output_dir, folder_name);

    match strategy {
        CopyStrategy::Whole => {
            fs::copy(source, &destination)
                .await
                .map_err(|e| FilesystemError::copy(source, &destination, e))?;
        }
        CopyStrategy::Streamed => copy_streamed(source, &destination).await?,
    }

    debug!("{} -> {}", source.display(), destination.display());
    Ok(destination)
}

/// 流式复制，读写失败分开报告
async fn copy_streamed(source: &Path, destination: &Path) -> Result<(), FilesystemError> {
    let mut reader = File::open(source)
        .await
        .map_err(|e| FilesystemError::read(source, e))?;
    let mut writer = File::create(destination)
        .await
        .map_err(|e| FilesystemError::write(destination, e))?;

    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = reader
            .read(&mut buf)
            .await
            .map_err(|e| FilesystemError::read(source, e))?;
        if n == 0 {
            break;
        }
        writer
            .write_all(&buf[..n])
            .await
            .map_err(|e| FilesystemError::write(destination, e))?;
    }

    writer
        .flush()
        .await
        .map_err(|e| FilesystemError::write(destination, e))?;
    Ok(())
}
