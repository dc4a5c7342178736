//! Omega 定价演示服务器入口

use omega_demo_server::{
    app::{self, RECORDS_PATH},
    infrastructure::{config::load_config, logger::Logger},
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_path) = load_config()?;
    let _guard = Logger::init(&config.logging)?;

    match config_path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let app = app::router(config.pricing.api_key.as_str());

    let addr = config.http.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 定价演示服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET {} - 产品价格记录 (api_key, start_date, end_date, demo)", RECORDS_PATH);
    info!("💡 demo 场景: name_change, new_product, three_fiddy, no_results");

    axum::serve(listener, app).await?;
    Ok(())
}
