//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod catalog_cmd;
mod log_cmd;

pub use catalog_cmd::*;
pub use log_cmd::*;
