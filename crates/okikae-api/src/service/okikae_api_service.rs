//! Validation and Replacement Service

use okikae::ValidationResult;
use tracing::debug;

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{ReplaceRequest, ReplaceResponse, ValidateRequest};

/// Common interface for the validation and replacement service
///
/// This trait allows swapping production implementation (`OkikaeApiServiceFull`) with
/// test stubs.
pub trait OkikaeApiService: Send + Sync {
  /// Validates a search string
  ///
  /// Constraint violations are reported in the returned value, not as an error.
  ///
  /// # Errors
  /// Internal error
  fn validate(&self, request: ValidateRequest) -> Result<ValidationResult>;

  /// Replaces every occurrence of the search string in the text
  ///
  /// # Errors
  /// - Text exceeds the configured maximum size
  /// - Internal error
  fn replace(&self, request: ReplaceRequest) -> Result<ReplaceResponse>;
}

/// Validation and Replacement Service
///
/// Holds no state besides the request size limit; every call is independent.
#[derive(Debug, Clone)]
pub struct OkikaeApiServiceFull {
  /// Maximum size of the `text` field (bytes)
  max_text_bytes: usize,
}

impl OkikaeApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including the text size limit)
  #[must_use]
  pub fn new(config: &Config) -> Self {
    Self {
      max_text_bytes: config.max_text_bytes,
    }
  }

  /// Validates a search string
  pub fn validate(&self, request: ValidateRequest) -> ValidationResult {
    okikae::validate(&request.input)
  }

  /// Executes the replacement
  ///
  /// # Errors
  /// If text exceeds the maximum size
  pub fn replace(&self, request: ReplaceRequest) -> Result<ReplaceResponse> {
    let text_bytes = request.text.len();
    if text_bytes > self.max_text_bytes {
      return Err(ApiError::text_too_long(text_bytes, self.max_text_bytes));
    }

    let ReplaceRequest {
      search,
      replacement,
      text,
    } = request;
    let outcome = okikae::try_replace(&search, &replacement, &text);
    if let Err(err) = &outcome {
      debug!(code = err.code(), "置換をスキップしました");
    }

    Ok(ReplaceResponse::from_outcome(outcome, text))
  }
}

/// Production implementation of trait `OkikaeApiService`
impl OkikaeApiService for OkikaeApiServiceFull {
  fn validate(&self, request: ValidateRequest) -> Result<ValidationResult> {
    // Note: Writing `self.validate(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    Ok(OkikaeApiServiceFull::validate(self, request))
  }

  fn replace(&self, request: ReplaceRequest) -> Result<ReplaceResponse> {
    OkikaeApiServiceFull::replace(self, request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn create_test_service(max_text_bytes: usize) -> OkikaeApiServiceFull {
    let config = Config {
      bind_addr: "127.0.0.1:5541".to_string(),
      max_text_bytes,
    };
    OkikaeApiServiceFull::new(&config)
  }

  fn replace_request(search: &str, replacement: &str, text: &str) -> ReplaceRequest {
    ReplaceRequest {
      search: search.to_string(),
      replacement: replacement.to_string(),
      text: text.to_string(),
    }
  }

  #[test]
  fn test_validate_kana() {
    let service = create_test_service(1_000);
    let result = service.validate(ValidateRequest {
      input: "ねこ".to_string(),
    });
    assert!(result.is_valid);
  }

  #[test]
  fn test_validate_reports_violation_in_band() {
    let service = create_test_service(1_000);
    let request = ValidateRequest {
      input: "abc".to_string(),
    };
    let result = OkikaeApiService::validate(&service, request).expect("validation never fails");
    assert!(!result.is_valid);
    assert_eq!(result.message, "ひらがなまたはカタカナのみ入力できます");
  }

  #[test]
  fn test_replace_success() {
    let service = create_test_service(1_000);
    let response = service.replace(replace_request("ねこ", "猫", "ねこがいる")).unwrap();
    assert_eq!(response.display_text, "猫がいる");
    assert_eq!(response.error, "");
    assert_eq!(response.replacements, 1);
  }

  #[test]
  fn test_replace_violation_is_not_an_api_error() {
    let service = create_test_service(1_000);
    let response = service.replace(replace_request("01234567890", "x", "hello")).unwrap();
    assert_eq!(response.display_text, "hello");
    assert_eq!(response.error, "10文字以内で入力してください");
  }

  #[test]
  fn test_text_too_long_error() {
    let service = create_test_service(8);
    let result = service.replace(replace_request("ねこ", "猫", "ねこがいる"));
    let err = result.unwrap_err();
    assert_eq!(err.code(), "text_too_long");
  }

  #[test]
  fn test_text_at_limit_is_accepted() {
    // "ねこ" は 6 バイト
    let service = create_test_service(6);
    let response = service.replace(replace_request("ねこ", "猫", "ねこ")).unwrap();
    assert_eq!(response.display_text, "猫");
  }
}
