//! Landing Page Handlers
//!
//! 页面与脚本都编译进二进制，不依赖运行目录

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../../web/index.html");
const APP_JS: &str = include_str!("../../../../web/static/app.js");

/// GET / - 静态首页
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js - 首页脚本
pub async fn app_script() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (CACHE_CONTROL, "no-cache"),
        ],
        APP_JS,
    )
}
