use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件系统错误
    #[error("文件系统错误: {0}")]
    Filesystem(#[from] FilesystemError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件系统错误
///
/// 列目录、读、写、创建目录失败都归到这里，每个变体都带上出错的路径
#[derive(Debug, Error)]
pub enum FilesystemError {
    /// 无法列出目录内容
    #[error("无法读取目录 {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 无法读取文件元数据
    #[error("无法读取文件信息 {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 创建目录失败
    #[error("创建目录失败 {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 读取文件失败
    #[error("读取文件失败 {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 复制文件失败
    #[error("复制文件失败 {} -> {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// 取值无法识别
    #[error("无法识别的取值 {value:?} (字段: {field})")]
    InvalidValue { field: String, value: String },
}

// ========== 便捷构造函数 ==========

impl FilesystemError {
    pub fn list_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilesystemError::ListDir {
            path: path.into(),
            source,
        }
    }

    pub fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilesystemError::Metadata {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilesystemError::CreateDir {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilesystemError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilesystemError::Write {
            path: path.into(),
            source,
        }
    }

    pub fn copy(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        FilesystemError::Copy {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// 出错的主路径（复制错误取目标路径）
    pub fn path(&self) -> &std::path::Path {
        match self {
            FilesystemError::ListDir { path, .. }
            | FilesystemError::Metadata { path, .. }
            | FilesystemError::CreateDir { path, .. }
            | FilesystemError::Read { path, .. }
            | FilesystemError::Write { path, .. } => path,
            FilesystemError::Copy { to, .. } => to,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
