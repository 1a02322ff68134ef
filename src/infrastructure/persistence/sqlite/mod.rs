//! SQLite Persistence - SQLite 数据库连接

mod database;

pub use database::*;
