//! 日志工具模块
//!
//! 提供控制台日志格式化和输出的辅助函数

use crate::config::Config;
use crate::orchestrator::RunSummary;
use std::path::Path;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 案件 PDF 收集");
    info!("📁 源目录: {}", config.source_root.display());
    info!("📂 输出目录: {}", config.output_dir.display());
    match (config.range_start, config.range_end) {
        (Some(start), Some(end)) => info!("🔢 编号范围: {}-{}", start, end),
        _ => info!("🔢 编号范围: 全部"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录文件夹扫描结果
///
/// # 参数
/// - `total`: 文件夹总数
pub fn log_folders_found(total: usize) {
    info!("✓ 找到 {} 个待处理的文件夹\n", total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 运行汇总
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(summary: &RunSummary, log_file_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("耗时: {:.3}s", summary.elapsed.as_secs_f64());
    info!("{}", "=".repeat(60));
    info!("✅ 已复制: {}/{}", summary.copied.len(), summary.total);
    info!("⏭️ 无 PDF: {}", summary.skipped.len());
    info!("❌ 失败: {}", summary.failed.len());
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("100, 101", 20), "100, 101");
        assert_eq!(truncate_text("案件一二三四", 2), "案件...");
    }
}
