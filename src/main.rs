use anyhow::Result;
use case_pdf_collector::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load()?;

    // 初始化并运行应用
    let summary = App::initialize(config).await?.run().await?;

    if !summary.is_clean() {
        tracing::warn!("⚠️ {} 个文件夹处理失败，详见日志", summary.failed.len());
    }

    Ok(())
}
