//! Response Model Definition

use okikae::{Replaced, ReplacementResult, ValidationError};
use serde::Serialize;

/// Replacement Response
///
/// Same fields as [`ReplacementResult`] plus the number of replaced occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceResponse {
  /// Substituted text, or the original text when `error` is set
  pub display_text: String,
  /// User-facing error message (empty on success)
  pub error: String,
  /// Number of replaced occurrences (0 on error)
  pub replacements: usize,
}

impl ReplaceResponse {
  /// Builds the response from the outcome of [`okikae::try_replace`]
  ///
  /// # Arguments
  /// * `outcome` - Replacement outcome
  /// * `original_text` - Text shown when the outcome is an error
  #[must_use]
  pub fn from_outcome(outcome: Result<Replaced, ValidationError>, original_text: String) -> Self {
    match outcome {
      Ok(replaced) => Self {
        display_text: replaced.text,
        error: String::new(),
        replacements: replaced.count,
      },
      Err(err) => {
        let result = ReplacementResult::failed(original_text, &err);
        Self {
          display_text: result.display_text,
          error: result.error,
          replacements: 0,
        }
      }
    }
  }
}

impl From<ReplaceResponse> for ReplacementResult {
  fn from(response: ReplaceResponse) -> Self {
    Self {
      display_text: response.display_text,
      error: response.error,
    }
  }
}
