//! Application State
//!
//! 启动时构造，请求之间只读共享

use crate::application::ConvertTextHandler;
use crate::infrastructure::persistence::sqlite::DbPool;

/// 应用状态
pub struct AppState {
    pub convert_handler: ConvertTextHandler,
    /// 数据库未启用时为 None
    pub db_pool: Option<DbPool>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(convert_handler: ConvertTextHandler, db_pool: Option<DbPool>) -> Self {
        Self {
            convert_handler,
            db_pool,
        }
    }
}
