//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    /// API key 不匹配
    Forbidden,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            // 拒绝时返回空 JSON 对象
            CoreError::Forbidden => {
                (StatusCode::FORBIDDEN, Json(serde_json::json!({}))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_forbidden_response() {
        let response = CoreError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"{}");
    }
}
