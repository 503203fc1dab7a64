//! Shared types for the restaurant backend
//!
//! API-facing models, error types and response structures used by
//! restaurant-server and its clients.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
