//! Command Handlers 实现

mod convert_handlers;

pub use convert_handlers::*;
