//! 入力検証
//!
//! 検索文字列は「文字数 → 文字クラス」の順に検査し、最初に違反した規則のみを報告する。
//! 置換後文字列は文字数のみを検査する。

use tracing::debug;

use crate::constraints::{Field, char_len};
use crate::errors::ValidationError;
use crate::kana;
use crate::models::ValidationResult;

/// 検索文字列を検証する
///
/// # 検証項目
/// - 文字数が [`MAX_SEARCH_CHARS`](crate::MAX_SEARCH_CHARS) 以下
/// - すべての文字がかな文字クラスに含まれる
///
/// 空文字列は有効。
///
/// # Errors
/// 最初に違反した規則に対応する `ValidationError` を返す。
pub fn check_search(input: &str) -> Result<(), ValidationError> {
  check_length(Field::Search, input)?;

  if let Some((index, character)) = kana::find_non_kana(input) {
    debug!(index, character = %character, "検索文字列にかな以外の文字が含まれています");
    return Err(ValidationError::NotKana { character, index });
  }

  Ok(())
}

/// 置換後文字列を検証する（文字数のみ）
///
/// # Errors
/// [`MAX_REPLACEMENT_CHARS`](crate::MAX_REPLACEMENT_CHARS) を超える場合に `ValidationError::TooLong` を返す。
pub fn check_replacement(input: &str) -> Result<(), ValidationError> {
  check_length(Field::Replacement, input)
}

fn check_length(field: Field, input: &str) -> Result<(), ValidationError> {
  let actual = char_len(input);
  if actual > field.max_chars() {
    debug!(field = %field, actual, max = field.max_chars(), "文字数が上限を超えています");
    return Err(ValidationError::too_long(field, actual));
  }
  Ok(())
}

/// 検索文字列を検証し、結果を値として返す
///
/// 失敗しない。違反内容は `message` に入る。
#[must_use]
pub fn validate(input: &str) -> ValidationResult {
  check_search(input).into()
}
