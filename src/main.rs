//! # ANSI Pixel Gallery — 应用入口
//!
//! 本文件仅负责日志初始化、配置组装与构建调用。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use ansi_pixel_gallery::error::AppError;
use ansi_pixel_gallery::gallery::{self, GalleryConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("❌ {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = GalleryConfig::from_args(std::env::args().skip(1))?;

    log::info!(
        "🚀 开始构建画廊 - dataset={} output={}",
        config.dataset_path.display(),
        config.output_dir.display()
    );

    let summary = gallery::build(&config).await?;

    log::info!(
        "📄 页面已生成: {} (rendered={} failed={})",
        summary.page_path.display(),
        summary.rendered,
        summary.failed
    );

    Ok(())
}
