//! Persistence Layer - 数据持久化
//!
//! SQLite 连接池（不存储领域数据）

pub mod sqlite;
