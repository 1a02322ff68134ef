//! HTTP Middleware
//!
//! 请求 ID 中间件：为每个请求分配追踪 ID，并记录错误响应

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求追踪 ID，放在 request extensions 中供 handler 读取
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// 沿用客户端传入的合法 UUID，否则新生成
    fn from_request(request: &Request) -> Self {
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok())
            .map(Self)
            .unwrap_or_else(|| Self(Uuid::new_v4()))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// 请求 ID 中间件
///
/// 成功和错误响应都带 `x-request-id`，4xx/5xx 连同 ID 和耗时记录日志
/// 错误类别和文案在 ApiError::into_response() 中记录
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request);
    request.extensions_mut().insert(request_id);

    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    if status.is_server_error() {
        tracing::error!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::post,
        Extension, Router,
    };
    use tower::util::ServiceExt;

    async fn echo_handler(Extension(request_id): Extension<RequestId>) -> String {
        request_id.to_string()
    }

    async fn rate_limited_handler() -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/echo", post(echo_handler))
            .route("/limited", post(rate_limited_handler))
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    fn post_to(uri: &str, request_id: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().method("POST").uri(uri);
        if let Some(id) = request_id {
            builder = builder.header(REQUEST_ID_HEADER, id);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn header_id(response: &Response) -> Uuid {
        let value = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        Uuid::parse_str(value).unwrap()
    }

    #[tokio::test]
    async fn test_handler_sees_response_request_id() {
        let response = create_test_router()
            .oneshot(post_to("/echo", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let id = header_id(&response);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), id.to_string());
    }

    #[tokio::test]
    async fn test_client_request_id_is_kept() {
        let id = Uuid::new_v4();
        let response = create_test_router()
            .oneshot(post_to("/echo", Some(&id.to_string())))
            .await
            .unwrap();

        assert_eq!(header_id(&response), id);
    }

    #[tokio::test]
    async fn test_invalid_request_id_is_replaced() {
        let response = create_test_router()
            .oneshot(post_to("/echo", Some("not-a-uuid")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_ne!(response.headers()[REQUEST_ID_HEADER], "not-a-uuid");
        header_id(&response);
    }

    #[tokio::test]
    async fn test_error_responses_carry_request_id() {
        let response = create_test_router()
            .oneshot(post_to("/limited", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        header_id(&response);
    }
}
