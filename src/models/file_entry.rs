use std::path::PathBuf;
use std::time::SystemTime;

/// 文件夹中的一个普通文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 文件名
    pub name: String,
    /// 完整路径
    pub path: PathBuf,
    /// 最后修改时间
    pub modified: SystemTime,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            modified,
        }
    }
}

/// 判断文件名的扩展名是否为 `.pdf`（忽略大小写）
pub fn has_pdf_extension(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}
