//! Data Model Definition
//!
//! Values returned across the host boundary. Field names serialize in camelCase
//! (`isValid`, `displayText`) to match what the form reads.
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Result of validating a search string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
  /// Whether the input satisfies every constraint
  pub is_valid: bool,

  /// User-facing message (empty when valid)
  pub message: String,
}

/// Result of a replacement request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementResult {
  /// Text to display: substituted on success, the original text on error
  pub display_text: String,

  /// User-facing error message (empty on success)
  pub error: String,
}

impl ValidationResult {
  /// Result for an input that passed validation
  #[must_use]
  pub fn valid() -> Self {
    Self {
      is_valid: true,
      message: String::new(),
    }
  }

  /// Result carrying the message of the first violated rule
  #[must_use]
  pub fn invalid(err: &ValidationError) -> Self {
    Self {
      is_valid: false,
      message: err.to_string(),
    }
  }
}

impl From<Result<(), ValidationError>> for ValidationResult {
  fn from(result: Result<(), ValidationError>) -> Self {
    match result {
      Ok(()) => Self::valid(),
      Err(err) => Self::invalid(&err),
    }
  }
}

impl ReplacementResult {
  /// Successful result with the substituted text
  #[must_use]
  pub fn ok(display_text: impl Into<String>) -> Self {
    Self {
      display_text: display_text.into(),
      error: String::new(),
    }
  }

  /// Failed result: the original text passes through unchanged
  #[must_use]
  pub fn failed(original_text: impl Into<String>, err: &ValidationError) -> Self {
    Self {
      display_text: original_text.into(),
      error: err.to_string(),
    }
  }

  /// Whether the result carries no error
  #[must_use]
  pub fn is_ok(&self) -> bool {
    self.error.is_empty()
  }
}
