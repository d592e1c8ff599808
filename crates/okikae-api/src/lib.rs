//! okikae-api crate
//!
//! Web server providing kana search and text replacement as HTTP API.
//!
//! ## Endpoints
//! - `POST /validate` - Search string validation
//! - `POST /replace` - Text replacement
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/replace \
//!   -H "Content-Type: application/json" \
//!   -d '{"search": "ねこ", "replacement": "猫", "text": "ねこがいる"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ReplaceRequest, ReplaceResponse, ValidateRequest};
pub use service::OkikaeApiServiceFull;
