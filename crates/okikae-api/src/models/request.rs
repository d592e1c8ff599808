//! リクエストモデル定義

use serde::Deserialize;

/// 検索文字列の検証リクエスト
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
  /// 検証対象の検索文字列
  pub input: String,
}

/// 置換リクエスト
#[derive(Debug, Deserialize)]
pub struct ReplaceRequest {
  /// 検索文字列（かなのみ、10文字まで）
  pub search: String,
  /// 置換後文字列（30文字まで）
  pub replacement: String,
  /// 置換対象のテキスト
  pub text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_validate_request() {
    let json = r#"{"input": "ねこ"}"#;
    let req: ValidateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.input, "ねこ");
  }

  #[test]
  fn deserialize_replace_request() {
    let json = r#"{"search": "ねこ", "replacement": "猫", "text": "ねこがいる"}"#;
    let req: ReplaceRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.search, "ねこ");
    assert_eq!(req.replacement, "猫");
    assert_eq!(req.text, "ねこがいる");
  }

  #[test]
  fn deserialize_replace_request_missing_field_fails() {
    let json = r#"{"search": "ねこ", "text": "ねこがいる"}"#;
    assert!(serde_json::from_str::<ReplaceRequest>(json).is_err());
  }

  #[test]
  fn deserialize_rejects_non_string() {
    let json = r#"{"input": 42}"#;
    assert!(serde_json::from_str::<ValidateRequest>(json).is_err());
  }
}
