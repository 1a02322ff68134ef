//! HTTP Handlers

mod convert;
mod page;
mod ping;

pub use convert::*;
pub use page::*;
pub use ping::*;
