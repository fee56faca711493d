use chrono::{DateTime, Local};
use std::fmt::Display;
use std::path::PathBuf;

/// 一次复制的记录，对应日志中的一行
#[derive(Debug, Clone)]
pub struct CopyRecord {
    /// 源文件路径
    pub source: PathBuf,
    /// 目标文件路径
    pub destination: PathBuf,
    /// 复制完成时间
    pub copied_at: DateTime<Local>,
}

impl CopyRecord {
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
            copied_at: Local::now(),
        }
    }
}

impl Display for CopyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "已复制 PDF 文件: {} -> {} ({})",
            self.source.display(),
            self.destination.display(),
            self.copied_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
