//! 定价业务服务

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use super::model::{Product, Scenario};
use crate::core::error::CoreError;

/// 固定的产品模板
struct Template {
    id: u32,
    name: &'static str,
    category: &'static str,
}

const CHAIR: Template = Template {
    id: 123456,
    name: "Fancy Chair",
    category: "chair",
};

const TABLE: Template = Template {
    id: 234567,
    name: "Wood Table",
    category: "table",
};

const LAMP: Template = Template {
    id: 345678,
    name: "Floor Lamp",
    category: "lamp",
};

const GAME_CONSOLE: Template = Template {
    id: 720720,
    name: "Xbox Series X",
    category: "game console",
};

/// `name_change` 场景下椅子的替换名称
pub const IRREGULAR_CHAIR_NAME: &str = "Irregular Chair";

/// `three_fiddy` 场景下椅子的固定价格
pub const THREE_FIDDY_PRICE: &str = "$3.50";

impl Template {
    fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Product {
        Product {
            id: self.id,
            name: self.name.to_string(),
            price: random_price(rng),
            category: self.category.to_string(),
            discontinued: false,
        }
    }
}

/// 生成随机价格：美元 [2, 101]，美分 [0, 99]
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> String {
    let dollars: u32 = rng.gen_range(2..=101);
    let cents: u32 = rng.gen_range(0..100);
    format!("${}.{:02}", dollars, cents)
}

/// 按场景生成产品记录，使用线程本地随机数
pub fn generate(scenario: &str) -> Vec<Product> {
    generate_with(Scenario::parse(scenario), &mut rand::thread_rng())
}

/// 按场景生成产品记录，顺序固定
pub fn generate_with<R: Rng + ?Sized>(scenario: Scenario, rng: &mut R) -> Vec<Product> {
    match scenario {
        Scenario::NameChange => {
            let mut chair = CHAIR.build(rng);
            chair.name = IRREGULAR_CHAIR_NAME.to_string();
            vec![chair, TABLE.build(rng), LAMP.build(rng)]
        }
        Scenario::NewProduct => vec![GAME_CONSOLE.build(rng), TABLE.build(rng), LAMP.build(rng)],
        Scenario::ThreeFiddy => {
            let mut chair = CHAIR.build(rng);
            chair.price = THREE_FIDDY_PRICE.to_string();
            vec![chair, TABLE.build(rng), LAMP.build(rng)]
        }
        Scenario::NoResults => Vec::new(),
        Scenario::Default => vec![CHAIR.build(rng), TABLE.build(rng), LAMP.build(rng)],
    }
}

#[derive(Clone)]
pub struct PricingService {
    api_key: Arc<str>,
}

impl PricingService {
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// 校验 API key，精确字符串比较
    pub fn authorize(&self, api_key: &str) -> Result<(), CoreError> {
        if api_key == &*self.api_key {
            Ok(())
        } else {
            warn!("API key 校验失败");
            Err(CoreError::Forbidden)
        }
    }

    pub fn records(&self, demo: &str) -> Vec<Product> {
        let records = generate(demo);
        debug!(
            "场景 {} 生成 {} 条产品记录",
            Scenario::parse(demo).as_str(),
            records.len()
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pricing::model::price_in_cents;
    use rand::{rngs::StdRng, SeedableRng};

    fn categories(records: &[Product]) -> Vec<&str> {
        records.iter().map(|p| p.category.as_str()).collect()
    }

    fn assert_price_format(price: &str) {
        let amount = price.strip_prefix('$').expect("缺少 $ 前缀");
        let (dollars, cents) = amount.split_once('.').expect("缺少小数点");
        assert!((1..=3).contains(&dollars.len()), "美元位数错误: {}", price);
        assert_eq!(cents.len(), 2, "美分位数错误: {}", price);
        let dollars: u32 = dollars.parse().unwrap();
        let cents: u32 = cents.parse().unwrap();
        assert!((2..=101).contains(&dollars), "美元超出范围: {}", price);
        assert!(cents <= 99);
    }

    #[test]
    fn test_default_scenario() {
        for demo in ["", "default", "unknown", "No_Results", "three fiddy"] {
            let records = generate(demo);
            assert_eq!(categories(&records), vec!["chair", "table", "lamp"]);
        }
    }

    #[test]
    fn test_no_results() {
        for _ in 0..10 {
            assert!(generate("no_results").is_empty());
        }
    }

    #[test]
    fn test_new_product() {
        let records = generate("new_product");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, "game console");
        assert_eq!(records[0].id, 720720);
        assert_eq!(categories(&records), vec!["game console", "table", "lamp"]);
    }

    #[test]
    fn test_three_fiddy() {
        for _ in 0..20 {
            let records = generate("three_fiddy");
            assert_eq!(records[0].price, "$3.50");
            assert_eq!(records[0].category, "chair");
            assert_eq!(price_in_cents(&records[0].price), Ok(350));
        }
    }

    #[test]
    fn test_name_change() {
        let records = generate("name_change");
        assert_eq!(records[0].name, IRREGULAR_CHAIR_NAME);
        assert_eq!(records[0].id, 123456);
        assert_eq!(categories(&records), vec!["chair", "table", "lamp"]);
    }

    #[test]
    fn test_price_format_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            assert_price_format(&random_price(&mut rng));
        }
        for demo in ["", "name_change", "new_product"] {
            for product in generate(demo) {
                assert_price_format(&product.price);
            }
        }
    }

    #[test]
    fn test_price_bounds_reached() {
        let mut rng = StdRng::seed_from_u64(42);
        let cents: Vec<u64> = (0..20_000)
            .map(|_| price_in_cents(&random_price(&mut rng)).unwrap())
            .collect();
        assert!(cents.iter().any(|c| c / 100 == 2));
        assert!(cents.iter().any(|c| c / 100 == 101));
        assert!(cents.iter().all(|c| (200..=10199).contains(c)));
    }

    #[test]
    fn test_fixed_fields_stable_across_calls() {
        for demo in ["", "name_change", "new_product", "three_fiddy"] {
            let first = generate(demo);
            let second = generate(demo);
            assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(second.iter()) {
                assert_eq!(a.id, b.id);
                assert_eq!(a.name, b.name);
                assert_eq!(a.category, b.category);
                assert_eq!(a.discontinued, b.discontinued);
                assert!(!a.discontinued);
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_with(Scenario::Default, &mut StdRng::seed_from_u64(1));
        let b = generate_with(Scenario::Default, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_service_records_follow_scenario() {
        let service = PricingService::new("abc123key");
        assert!(service.records("no_results").is_empty());
        assert_eq!(service.records("three_fiddy")[0].price, THREE_FIDDY_PRICE);
        assert_eq!(service.records("new_product")[0].id, 720720);
        assert_eq!(
            categories(&service.records("\u{FFFD}")),
            vec!["chair", "table", "lamp"]
        );
    }

    #[test]
    fn test_authorize() {
        let service = PricingService::new("abc123key");
        assert!(service.authorize("abc123key").is_ok());
        assert!(matches!(
            service.authorize("wrongkey"),
            Err(CoreError::Forbidden)
        ));
        assert!(service.authorize("").is_err());
        assert!(service.authorize("ABC123KEY").is_err());
    }
}
