//! 应用层 - 命令
//!
//! 唯一的写路径：把文本交给合成服务

mod convert_commands;

pub mod handlers;

pub use convert_commands::*;
