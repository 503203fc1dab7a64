//! 工具模块
//!
//! - [`AppError`] / [`ApiResponse`] - 统一错误和响应结构 (from shared::error)
//! - 日志初始化

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
