//! モデルモジュール

mod request;
mod response;

pub use request::{ReplaceRequest, ValidateRequest};
pub use response::ReplaceResponse;
