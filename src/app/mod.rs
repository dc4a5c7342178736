//! 应用层

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use pricing::{handler::AppState, service::PricingService};

pub mod pricing;

pub const RECORDS_PATH: &str = "/pricing/records.json";

/// 构建应用路由
pub fn router(api_key: impl Into<std::sync::Arc<str>>) -> Router {
    let state = AppState {
        pricing_service: PricingService::new(api_key),
    };

    Router::new()
        .route(RECORDS_PATH, get(pricing::handler::get_records))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
