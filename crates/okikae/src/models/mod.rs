//! モデルモジュール

mod model_definition;

pub use model_definition::{ReplacementResult, ValidationResult};
