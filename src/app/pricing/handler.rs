//! 定价处理器

use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::info;

use super::{
    model::{RecordsQuery, RecordsResponse},
    service::PricingService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub pricing_service: PricingService,
}

/// GET /pricing/records.json
pub async fn get_records(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<RecordsResponse>, CoreError> {
    let query: RecordsQuery = pairs.into_iter().collect();
    state.pricing_service.authorize(&query.api_key)?;

    let product_records = state.pricing_service.records(&query.demo);
    info!(
        "返回 {} 条产品记录 (demo: {:?}, 周期: {} ~ {})",
        product_records.len(),
        query.demo,
        query.start_date,
        query.end_date
    );

    Ok(Json(RecordsResponse {
        period_start: query.start_date,
        period_end: query.end_date,
        product_records,
    }))
}
