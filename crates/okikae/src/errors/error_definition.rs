//! エラー定義

use thiserror::Error;

use crate::constraints::Field;

/// 入力検証エラー
///
/// いずれも利用者の入力ミスであり、呼び出し側で `message` / `error` 欄に表示して回復する。
/// 表示文言は入力フォームにそのまま出すため、詳細はフィールドに持たせる。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  /// 文字数が上限を超えている
  #[error("{max}文字以内で入力してください")]
  TooLong {
    /// 対象の入力欄
    field: Field,
    /// 許容される最大文字数
    max: usize,
    /// 実際の文字数
    actual: usize,
  },

  /// ひらがな・カタカナ以外の文字を含む
  #[error("ひらがなまたはカタカナのみ入力できます")]
  NotKana {
    /// 最初に見つかった不正な文字
    character: char,
    /// その文字の位置（文字単位、0 始まり）
    index: usize,
  },
}

impl ValidationError {
  /// 文字数超過エラーを作成
  #[must_use]
  pub fn too_long(field: Field, actual: usize) -> Self {
    Self::TooLong {
      field,
      max: field.max_chars(),
      actual,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::TooLong { .. } => "too_long",
      Self::NotKana { .. } => "not_kana",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn too_long_message_for_search() {
    let err = ValidationError::too_long(Field::Search, 11);
    assert_eq!(err.to_string(), "10文字以内で入力してください");
    assert_eq!(err.code(), "too_long");
    match err {
      ValidationError::TooLong { field, max, actual } => {
        assert_eq!(field, Field::Search);
        assert_eq!(max, 10);
        assert_eq!(actual, 11);
      }
      _ => panic!("expected TooLong error"),
    }
  }

  #[test]
  fn too_long_message_for_replacement() {
    let err = ValidationError::too_long(Field::Replacement, 31);
    assert_eq!(err.to_string(), "30文字以内で入力してください");
  }

  #[test]
  fn not_kana_message() {
    let err = ValidationError::NotKana {
      character: 'a',
      index: 0,
    };
    assert_eq!(err.to_string(), "ひらがなまたはカタカナのみ入力できます");
    assert_eq!(err.code(), "not_kana");
  }
}
