//! # Case PDF Collector
//!
//! 扫描按案件编号命名的文件夹，把每个文件夹中最后修改的 PDF
//! 复制到同一个输出目录，并以文件夹名重新命名。
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `folder_selector` - 列出（可按编号范围过滤的）案件文件夹
//! - `pdf_picker` - 找出文件夹中最后修改的 PDF
//! - `copier` - 复制为 `<文件夹名>.pdf`
//! - `RunLog` - 写 console-log.txt 能力
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一个文件夹"的完整处理流程
//! - `FolderCtx` - 上下文封装（文件夹名 + 序号）
//! - `FolderFlow` - 流程编排（挑选 → 复制/跳过 → 记录）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 初始化、逐个处理、汇总统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, CopyStrategy, LogMode};
pub use error::{AppError, AppResult, ConfigError, FilesystemError};
pub use models::{CopyRecord, FileEntry};
pub use orchestrator::{App, RunSummary};
pub use workflow::{FolderCtx, FolderFlow, FolderResult};
