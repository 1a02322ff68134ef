//! Convert Handler - 文本转语音

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{ApplicationError, ConvertTextCommand};
use crate::infrastructure::http::dto::ConvertRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::middleware::RequestId;
use crate::infrastructure::http::state::AppState;

/// POST /convert
///
/// 成功返回 audio/mpeg 二进制；失败返回 JSON 错误
/// `x-request-id` 响应头由请求 ID 中间件写入
pub async fn convert(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let handler = &state.convert_handler;

    // 凭证检查先于请求体解析
    handler.ensure_credential()?;

    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Invalid convert request body");
        ApplicationError::validation("Request body must be a JSON object with a string \"text\" field")
    })?;

    let request_id = request_id.map_or_else(Uuid::new_v4, |Extension(id)| id.0);
    let result = handler
        .handle(ConvertTextCommand {
            request_id,
            text: request.text,
        })
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, result.content_type)],
        result.audio_data,
    )
        .into_response())
}
