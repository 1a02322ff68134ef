//! Ping Handler
//!
//! 健康检查，附带数据库连通性

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::PingResponse;
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::persistence::sqlite::ping_database;

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let database = match &state.db_pool {
        None => "disabled",
        Some(pool) => match ping_database(pool).await {
            Ok(()) => "ok",
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed");
                "unavailable"
            }
        },
    };

    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
