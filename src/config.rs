use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 复制方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyStrategy {
    /// 一次性整文件复制
    #[default]
    Whole,
    /// 流式读写复制
    Streamed,
}

impl FromStr for CopyStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole" => Ok(CopyStrategy::Whole),
            "streamed" | "stream" => Ok(CopyStrategy::Streamed),
            _ => Err(ConfigError::InvalidValue {
                field: "copy_strategy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// 日志文件打开方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// 每次运行重新创建日志文件
    #[default]
    Truncate,
    /// 保留之前的内容，在末尾追加新的一段
    Append,
}

impl FromStr for LogMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(LogMode::Truncate),
            "append" => Ok(LogMode::Append),
            _ => Err(ConfigError::InvalidValue {
                field: "log_mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待扫描的案件目录
    pub source_root: PathBuf,
    /// 复制结果存放目录
    pub output_dir: PathBuf,
    /// console-log.txt 所在目录
    pub log_dir: PathBuf,
    /// 编号范围下限（含）
    pub range_start: Option<i64>,
    /// 编号范围上限（含）
    pub range_end: Option<i64>,
    /// 复制方式
    pub copy_strategy: CopyStrategy,
    /// 日志文件打开方式
    pub log_mode: LogMode,
    /// 单个文件夹出错时是否中止整个运行
    pub fail_fast: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("source"),
            output_dir: PathBuf::from("output"),
            log_dir: PathBuf::from("."),
            range_start: None,
            range_end: None,
            copy_strategy: CopyStrategy::Whole,
            log_mode: LogMode::Truncate,
            fail_fast: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            source_root: std::env::var("SOURCE_ROOT").map(PathBuf::from).unwrap_or(default.source_root),
            output_dir: std::env::var("OUTPUT_DIR").map(PathBuf::from).unwrap_or(default.output_dir),
            log_dir: std::env::var("LOG_DIR").map(PathBuf::from).unwrap_or(default.log_dir),
            range_start: std::env::var("RANGE_START").ok().and_then(|v| v.parse().ok()).or(default.range_start),
            range_end: std::env::var("RANGE_END").ok().and_then(|v| v.parse().ok()).or(default.range_end),
            copy_strategy: std::env::var("COPY_STRATEGY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.copy_strategy),
            log_mode: std::env::var("LOG_MODE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.log_mode),
            fail_fast: std::env::var("FAIL_FAST").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fail_fast),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 文件加载配置，缺省字段取默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 优先读取 CONFIG_FILE 指向的配置文件，否则使用环境变量
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_toml_file(Path::new(&path)),
            Err(_) => Ok(Self::from_env()),
        }
    }
}
