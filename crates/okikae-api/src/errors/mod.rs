//! errors module
pub mod error_definition;

/// Re-export error types
pub use error_definition::{ApiError, ApiErrorKind, Result};
