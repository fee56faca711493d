//! 文件夹处理上下文
//!
//! 封装"我正在处理第几个文件夹"这一信息

use std::fmt::Display;

/// 文件夹处理上下文
#[derive(Debug, Clone)]
pub struct FolderCtx {
    /// 文件夹名称
    pub folder_name: String,

    /// 文件夹序号（从1开始，仅用于日志显示）
    pub folder_index: usize,

    /// 本次运行的文件夹总数
    pub total: usize,
}

impl FolderCtx {
    pub fn new(folder_name: String, folder_index: usize, total: usize) -> Self {
        Self {
            folder_name,
            folder_index,
            total,
        }
    }
}

impl Display for FolderCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文件夹 {}/{} #{}]",
            self.folder_index, self.total, self.folder_name
        )
    }
}
