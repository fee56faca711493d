//! 批量文件夹处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整运行的调度和统计。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建输出目录、初始化运行日志
//! 2. **扫描文件夹**：列出源目录下（可选编号范围内）的所有文件夹
//! 3. **顺序处理**：逐个委托 `FolderFlow` 处理，不并发
//! 4. **错误隔离**：单个文件夹失败只记录，不影响后续文件夹（`fail_fast` 除外）
//! 5. **全局统计**：汇总复制、跳过、失败的数量和耗时
//!
//! ## 状态流转
//!
//! ```text
//! Init → CreateOutputDir → ListFolders → [PickPdf → (Copy | SkipNoPdf) → Log]* → Done
//! ```

use crate::config::Config;
use crate::error::{AppResult, FilesystemError};
use crate::models::CopyRecord;
use crate::services::{select_folders, RunLog};
use crate::utils::logging::{log_folders_found, log_startup, print_final_stats, truncate_text};
use crate::workflow::{FolderCtx, FolderFlow, FolderResult};
use std::time::{Duration, Instant};
use tokio::fs;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    run_log: RunLog,
}

impl App {
    /// 初始化应用
    ///
    /// 输出目录或日志文件无法创建时直接返回错误
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        create_output_directory(&config).await?;

        let run_log = RunLog::init(&config.log_dir, config.log_mode)?;

        Ok(Self { config, run_log })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunSummary> {
        let started = Instant::now();

        info!("\n📁 正在扫描 {} ...", self.config.source_root.display());
        let folders = select_folders(
            &self.config.source_root,
            self.config.range_start,
            self.config.range_end,
        )
        .await?;

        let folder_list = folders.join(", ");
        self.run_log.append(&format!(
            "正在处理 {} 中的文件夹: {}",
            self.config.source_root.display(),
            folder_list
        ));
        log_folders_found(folders.len());
        if self.config.verbose_logging {
            info!("📋 {}", truncate_text(&folder_list, 200));
        }

        if folders.is_empty() {
            warn!("⚠️ 没有找到待处理的文件夹");
        }

        let mut summary = self.process_all_folders(folders).await?;

        self.run_log.append(&format!(
            "\n文件夹处理完成: 复制 {}, 无 PDF {}, 失败 {}",
            summary.copied.len(),
            summary.skipped.len(),
            summary.failed.len()
        ));

        summary.elapsed = started.elapsed();
        print_final_stats(&summary, self.run_log.path());

        Ok(summary)
    }

    /// 逐个处理文件夹
    async fn process_all_folders(&self, folders: Vec<String>) -> AppResult<RunSummary> {
        let flow = FolderFlow::new(&self.config);
        let total = folders.len();
        let mut summary = RunSummary {
            total,
            ..Default::default()
        };

        for (idx, folder_name) in folders.into_iter().enumerate() {
            let ctx = FolderCtx::new(folder_name, idx + 1, total);

            match flow.run(&ctx, &self.run_log).await {
                Ok(FolderResult::Copied(record)) => {
                    info!("{} ✓ 已复制", ctx);
                    summary.copied.push(record);
                }
                Ok(FolderResult::Skipped) => {
                    info!("{} ⏭️ 没有 PDF 文件", ctx);
                    summary.skipped.push(ctx.folder_name);
                }
                Err(e) => {
                    if self.config.fail_fast {
                        return Err(e);
                    }
                    summary.failed.push((ctx.folder_name, e.to_string()));
                }
            }
        }

        Ok(summary)
    }
}

/// 运行汇总
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 参与处理的文件夹数
    pub total: usize,
    /// 复制记录
    pub copied: Vec<CopyRecord>,
    /// 没有 PDF 的文件夹
    pub skipped: Vec<String>,
    /// 失败的文件夹及错误信息
    pub failed: Vec<(String, String)>,
    /// 耗时
    pub elapsed: Duration,
}

impl RunSummary {
    /// 是否所有文件夹都没有出错
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 创建输出目录，路径被普通文件占用等情况直接返回错误
async fn create_output_directory(config: &Config) -> Result<(), FilesystemError> {
    let output_dir = &config.output_dir;
    let existed = fs::metadata(output_dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    fs::create_dir_all(output_dir)
        .await
        .map_err(|e| FilesystemError::create_dir(output_dir, e))?;
    if !existed {
        info!("已创建输出目录: {}", output_dir.display());
    }
    Ok(())
}
