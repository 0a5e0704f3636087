//! API 路由模块。

pub mod run_code;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use jisi_code_api_types::HealthResponse;
use tower_http::cors::CorsLayer;

pub use run_code::run_code;
pub use state::AppState;

/// 创建完整的 API 路由。
pub fn create_router(state: Arc<AppState>, cors_origin: &str) -> anyhow::Result<Router> {
    let origin = HeaderValue::from_str(cors_origin)
        .with_context(|| format!("invalid CORS origin: {cors_origin}"))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Ok(Router::new()
        .route("/health", get(health))
        // 运行代码
        .route("/api/auth/run-code", post(run_code))
        .layer(cors)
        .with_state(state))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
