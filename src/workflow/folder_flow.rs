//! 文件夹处理流程 - 流程层
//!
//! 核心职责：定义"一个文件夹"的完整处理流程
//!
//! 流程顺序：
//! 1. 找出最后修改的 PDF
//! 2. 找到 → 复制为 `<文件夹名>.pdf` → 写复制记录
//! 3. 未找到 → 写跳过记录

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::{Config, CopyStrategy};
use crate::error::AppResult;
use crate::models::CopyRecord;
use crate::services::{copy_to_output, destination_path, pick_latest_pdf, RunLog};
use crate::workflow::folder_ctx::FolderCtx;

/// 文件夹处理结果
#[derive(Debug, Clone)]
pub enum FolderResult {
    /// 已复制
    Copied(CopyRecord),
    /// 跳过（文件夹中没有 PDF）
    Skipped,
}

/// 文件夹处理流程
///
/// - 编排选择、复制、记录三个步骤
/// - 出错时写下带源路径、目标路径和时间的失败记录，再把错误交给调用方
/// - 不决定出错后是否继续
pub struct FolderFlow {
    source_root: PathBuf,
    output_dir: PathBuf,
    copy_strategy: CopyStrategy,
    verbose_logging: bool,
}

impl FolderFlow {
    /// 创建新的文件夹处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            source_root: config.source_root.clone(),
            output_dir: config.output_dir.clone(),
            copy_strategy: config.copy_strategy,
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&self, ctx: &FolderCtx, run_log: &RunLog) -> AppResult<FolderResult> {
        let folder_path = self.source_root.join(&ctx.folder_name);
        let destination = destination_path(&self.output_dir, &ctx.folder_name);

        if self.verbose_logging {
            info!("{} 扫描 {}", ctx, folder_path.display());
        }

        let latest = match pick_latest_pdf(&folder_path).await {
            Ok(latest) => latest,
            Err(e) => {
                self.log_failure(ctx, run_log, None, &destination, &e);
                return Err(e.into());
            }
        };

        let Some(latest) = latest else {
            run_log.append(&format!(
                "未在 {} 中找到 PDF 文件",
                folder_path.display()
            ));
            return Ok(FolderResult::Skipped);
        };

        if self.verbose_logging {
            info!("{} 最新的 PDF: {}", ctx, latest.name);
        }

        match copy_to_output(
            &latest.path,
            &ctx.folder_name,
            &self.output_dir,
            self.copy_strategy,
        )
        .await
        {
            Ok(destination) => {
                let record = CopyRecord::new(latest.path, destination);
                run_log.append(&record.to_string());
                Ok(FolderResult::Copied(record))
            }
            Err(e) => {
                self.log_failure(ctx, run_log, Some(&latest.path), &destination, &e);
                Err(e.into())
            }
        }
    }

    fn log_failure(
        &self,
        ctx: &FolderCtx,
        run_log: &RunLog,
        source: Option<&Path>,
        destination: &Path,
        err: &dyn std::error::Error,
    ) {
        error!("{} ❌ 处理失败: {}", ctx, err);
        let source = source
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        run_log.append(&format!(
            "处理文件夹 {} 失败: {} (源: {}, 目标: {}, 时间: {})",
            ctx.folder_name,
            err,
            source,
            destination.display(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogMode;
    use crate::error::{AppError, FilesystemError};

    fn setup() -> (tempfile::TempDir, Config, RunLog) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            source_root: dir.path().join("src"),
            output_dir: dir.path().join("out"),
            log_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        std::fs::create_dir_all(&config.source_root).unwrap();
        std::fs::create_dir_all(&config.output_dir).unwrap();
        let run_log = RunLog::init(&config.log_dir, LogMode::Truncate).unwrap();
        (dir, config, run_log)
    }

    #[tokio::test]
    async fn test_run_copies_pdf() {
        let (_dir, config, run_log) = setup();
        let folder = config.source_root.join("100");
        std::fs::create_dir(&folder).unwrap();
        std::fs::write(folder.join("tuzba.pdf"), b"%PDF-1.4 content").unwrap();

        let flow = FolderFlow::new(&config);
        let ctx = FolderCtx::new("100".to_string(), 1, 1);
        let result = flow.run(&ctx, &run_log).await.unwrap();

        let FolderResult::Copied(record) = result else {
            panic!("expected a copy");
        };
        assert_eq!(record.destination, config.output_dir.join("100.pdf"));
        assert_eq!(
            std::fs::read(&record.destination).unwrap(),
            b"%PDF-1.4 content"
        );

        let log = std::fs::read_to_string(run_log.path()).unwrap();
        assert!(log.contains("已复制 PDF 文件"));
        assert!(log.contains("100.pdf"));
    }

    #[tokio::test]
    async fn test_run_skips_folder_without_pdf() {
        let (_dir, config, run_log) = setup();
        let folder = config.source_root.join("101");
        std::fs::create_dir(&folder).unwrap();
        std::fs::write(folder.join("readme.txt"), b"x").unwrap();

        let flow = FolderFlow::new(&config);
        let ctx = FolderCtx::new("101".to_string(), 1, 1);
        let result = flow.run(&ctx, &run_log).await.unwrap();

        assert!(matches!(result, FolderResult::Skipped));
        assert!(!config.output_dir.join("101.pdf").exists());
        let log = std::fs::read_to_string(run_log.path()).unwrap();
        assert!(log.contains("未在"));
    }

    #[tokio::test]
    async fn test_run_logs_failure_with_paths() {
        let (_dir, config, run_log) = setup();
        let flow = FolderFlow::new(&config);
        let ctx = FolderCtx::new("gone".to_string(), 1, 1);

        let err = flow.run(&ctx, &run_log).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Filesystem(FilesystemError::ListDir { .. })
        ));

        let log = std::fs::read_to_string(run_log.path()).unwrap();
        assert!(log.contains("处理文件夹 gone 失败"));
        assert!(log.contains("gone.pdf"));
    }
}
