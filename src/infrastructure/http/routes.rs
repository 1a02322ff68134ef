//! HTTP Routes
//!
//! Endpoints:
//! - /            GET   首页
//! - /convert     POST  文本转语音（成功返回 audio/mpeg）
//! - /api/ping    GET   健康检查
//! - /static/app.js GET 首页脚本（内嵌）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/static/app.js", get(handlers::app_script))
        .route("/convert", post(handlers::convert))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(handlers::ping))
}
