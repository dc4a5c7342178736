//! 定价数据模型

use serde::{Deserialize, Serialize};

/// 单个产品记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub discontinued: bool,
}

/// 演示场景，由 `demo` 查询参数选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    #[default]
    Default,
    NameChange,
    NewProduct,
    ThreeFiddy,
    NoResults,
}

impl Scenario {
    /// 解析场景名称，未知名称回退到默认场景
    pub fn parse(name: &str) -> Self {
        match name {
            "name_change" => Scenario::NameChange,
            "new_product" => Scenario::NewProduct,
            "three_fiddy" => Scenario::ThreeFiddy,
            "no_results" => Scenario::NoResults,
            _ => Scenario::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Default => "default",
            Scenario::NameChange => "name_change",
            Scenario::NewProduct => "new_product",
            Scenario::ThreeFiddy => "three_fiddy",
            Scenario::NoResults => "no_results",
        }
    }
}

impl From<&str> for Scenario {
    fn from(name: &str) -> Self {
        Scenario::parse(name)
    }
}

/// `/pricing/records.json` 查询参数
///
/// 所有字段缺省为空字符串，与空值等价处理。重复参数取第一次出现的值。
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecordsQuery {
    pub api_key: String,
    pub start_date: String,
    pub end_date: String,
    pub demo: String,
}

impl FromIterator<(String, String)> for RecordsQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = RecordsQuery::default();
        let mut seen = [false; 4];
        for (key, value) in pairs {
            let (slot, field) = match key.as_str() {
                "api_key" => (0, &mut query.api_key),
                "start_date" => (1, &mut query.start_date),
                "end_date" => (2, &mut query.end_date),
                "demo" => (3, &mut query.demo),
                _ => continue,
            };
            if !seen[slot] {
                seen[slot] = true;
                *field = value;
            }
        }
        query
    }
}

/// 授权成功时的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub period_start: String,
    pub period_end: String,
    #[serde(rename = "productRecords")]
    pub product_records: Vec<Product>,
}

/// 价格字符串解析错误
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("价格为空")]
    Empty,
    #[error("无效的价格格式: {0}")]
    Invalid(String),
}

/// 将 `$12.34` 形式的价格转换为分
pub fn price_in_cents(price: &str) -> Result<u64, PriceError> {
    price_in_cents_with_radix(price, '.')
}

/// 按指定小数分隔符将价格转换为分，例如 `$86753,09`
pub fn price_in_cents_with_radix(price: &str, radix: char) -> Result<u64, PriceError> {
    let trimmed = price.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if amount.is_empty() {
        return Err(PriceError::Empty);
    }

    let invalid = || PriceError::Invalid(price.to_string());
    let (dollars, cents) = match amount.split_once(radix) {
        Some((dollars, cents)) => (dollars, cents),
        None => (amount, ""),
    };

    if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if cents.len() > 2 || !cents.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let dollars: u64 = dollars.parse().map_err(|_| invalid())?;
    // "5" 表示 50 分
    let cents: u64 = match cents.len() {
        0 => 0,
        1 => cents.parse::<u64>().map_err(|_| invalid())? * 10,
        _ => cents.parse().map_err(|_| invalid())?,
    };

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(invalid)
}
