//! 定价接口命令行客户端
//!
//! 用法: fetch_prices [end_date] [demo]

use chrono::{NaiveDate, Utc};
use omega_demo_server::{
    client::{request_period, PricingClient},
    infrastructure::{config::load_config, logger::Logger},
};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, _) = load_config()?;
    let _guard = Logger::init_stderr(&config.logging)?;

    let args: Vec<String> = env::args().collect();
    let end_date = match args.get(1) {
        Some(arg) if arg == "-h" || arg == "--help" => {
            print_usage();
            return Ok(());
        }
        Some(arg) => NaiveDate::parse_from_str(arg, "%Y-%m-%d")?,
        None => Utc::now().date_naive(),
    };
    let demo = args.get(2).map(String::as_str);

    let (start_date, end_date) = request_period(end_date);
    info!("获取 {} ~ {} 的产品价格", start_date, end_date);

    let client = PricingClient::new(config.http.base_url(), config.pricing.api_key.clone());
    let products = client.get_prices(end_date, demo).await?;

    for product in &products {
        println!(
            "{:>8}  {:<16} {:<14} {:>8}{}",
            product.id,
            product.name,
            product.category,
            product.price,
            if product.discontinued { "  (已停产)" } else { "" }
        );
    }

    Ok(())
}

fn print_usage() {
    println!("用法: fetch_prices [end_date] [demo]");
    println!();
    println!("参数:");
    println!("  end_date  - 结束日期 YYYY-MM-DD，默认今天");
    println!("  demo      - 场景: name_change, new_product, three_fiddy, no_results");
}
