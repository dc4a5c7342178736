//! 定价接口客户端
//!
//! 调用 `/pricing/records.json` 并将结果解析为 [`Product`] 列表。

use chrono::{Datelike, NaiveDate};
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::app::{
    pricing::model::{price_in_cents, PriceError, Product, RecordsResponse},
    RECORDS_PATH,
};

/// 客户端错误类型
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("API key 被拒绝")]
    Forbidden,
    #[error("接口未返回任何产品记录")]
    NoResults,
    #[error("产品 {id} 价格无效: {source}")]
    InvalidPrice {
        id: u32,
        #[source]
        source: PriceError,
    },
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),
}

/// 请求周期：从 `end_date` 所在月份的第一天到 `end_date`
pub fn request_period(end_date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start_date = end_date.with_day(1).unwrap_or(end_date);
    (start_date, end_date)
}

#[derive(Clone)]
pub struct PricingClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PricingClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// 获取原始响应
    pub async fn fetch_records(
        &self,
        start_date: &str,
        end_date: &str,
        demo: Option<&str>,
    ) -> Result<RecordsResponse, ClientError> {
        let url = format!("{}{}", self.base_url, RECORDS_PATH);
        let mut params = vec![
            ("api_key", self.api_key.as_str()),
            ("start_date", start_date),
            ("end_date", end_date),
        ];
        if let Some(demo) = demo {
            params.push(("demo", demo));
        }

        debug!("请求 {} (周期: {} ~ {})", url, start_date, end_date);
        let response = self.http.get(&url).query(&params).send().await?;

        if response.status() == StatusCode::FORBIDDEN {
            return Err(ClientError::Forbidden);
        }

        let records = response.error_for_status()?.json::<RecordsResponse>().await?;
        Ok(records)
    }

    /// 获取指定周期的产品价格，空结果视为错误
    pub async fn get_prices(
        &self,
        end_date: NaiveDate,
        demo: Option<&str>,
    ) -> Result<Vec<Product>, ClientError> {
        let (start_date, end_date) = request_period(end_date);
        let response = self
            .fetch_records(&start_date.to_string(), &end_date.to_string(), demo)
            .await?;

        if response.product_records.is_empty() {
            return Err(ClientError::NoResults);
        }

        for product in &response.product_records {
            price_in_cents(&product.price).map_err(|source| ClientError::InvalidPrice {
                id: product.id,
                source,
            })?;
        }

        info!("获取到 {} 条产品价格", response.product_records.len());
        Ok(response.product_records)
    }
}
