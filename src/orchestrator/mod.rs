//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次运行的整体调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<文件夹>)
//!     ↓
//! workflow::FolderFlow (处理单个文件夹)
//!     ↓
//! services (能力层：选择 / 挑选 / 复制 / 日志)
//! ```
//!
//! ## 设计原则
//!
//! 1. **顺序执行**：一次只处理一个文件夹
//! 2. **向下依赖**：编排层 → workflow → services
//! 3. **无业务逻辑**：只做调度和统计，不做具体的文件判断

pub mod batch_processor;

pub use batch_processor::{App, RunSummary};
