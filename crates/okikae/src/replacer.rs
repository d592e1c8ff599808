//! 文字列置換
//!
//! 検索文字列・置換後文字列を検証したうえで、テキスト中の検索文字列をすべてリテラル置換する。
//!
//! # 処理順
//! 1. 検索文字列が空なら何もしない（置換後文字列は検証しない）
//! 2. 検索文字列を検証（文字数 → かな）
//! 3. 置換後文字列を検証（文字数のみ）
//! 4. 左から右へ、重なりなしで置換

use tracing::debug;

use crate::errors::ValidationError;
use crate::models::ReplacementResult;
use crate::validator::{check_replacement, check_search};

/// 置換に成功したテキストと置換回数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
  /// 置換後のテキスト
  pub text: String,
  /// 置換した箇所の数
  pub count: usize,
}

/// 検証付きで置換する
///
/// # Errors
/// 検索文字列または置換後文字列が制約に違反する場合、最初の違反を返す。
pub fn try_replace(search: &str, replacement: &str, text: &str) -> Result<Replaced, ValidationError> {
  if search.is_empty() {
    return Ok(Replaced {
      text: text.to_string(),
      count: 0,
    });
  }

  check_search(search)?;
  check_replacement(replacement)?;

  let replaced = replace_literal(text, search, replacement);
  debug!(
    search = %search,
    count = replaced.count,
    text_len = text.len(),
    "置換完了"
  );

  Ok(replaced)
}

/// 検証付きで置換し、結果を値として返す
///
/// 失敗しない。検証エラー時は元のテキストをそのまま `display_text` に入れ、
/// `error` にエラー文言を入れる。
#[must_use]
pub fn replace(search: &str, replacement: &str, text: &str) -> ReplacementResult {
  match try_replace(search, replacement, text) {
    Ok(replaced) => ReplacementResult::ok(replaced.text),
    Err(err) => ReplacementResult::failed(text, &err),
  }
}

/// 検証なしのリテラル置換
///
/// `needle` の出現を左から走査し、一致した範囲を消費してから次を探す。
/// 置換で挿入した文字列は再走査しない。`needle` が空なら何もしない。
#[must_use]
pub fn replace_literal(haystack: &str, needle: &str, with: &str) -> Replaced {
  if needle.is_empty() {
    return Replaced {
      text: haystack.to_string(),
      count: 0,
    };
  }

  let mut text = String::with_capacity(haystack.len());
  let mut last_end = 0;
  let mut count = 0;

  for (start, matched) in haystack.match_indices(needle) {
    text.push_str(&haystack[last_end..start]);
    text.push_str(with);
    last_end = start + matched.len();
    count += 1;
  }
  text.push_str(&haystack[last_end..]);

  Replaced { text, count }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constraints::Field;

  #[test]
  fn replaces_kana_with_kanji() {
    let result = replace("ねこ", "猫", "ねこがいる");
    assert_eq!(result, ReplacementResult::ok("猫がいる"));
  }

  #[test]
  fn replaces_every_occurrence() {
    let replaced = try_replace("ねこ", "猫", "ねこ、ねこ、こねこ").unwrap();
    assert_eq!(replaced.text, "猫、猫、こ猫");
    assert_eq!(replaced.count, 3);
  }

  #[test]
  fn empty_search_is_noop() {
    let result = replace("", "なんでも", "ねこがいる");
    assert_eq!(result, ReplacementResult::ok("ねこがいる"));
  }

  #[test]
  fn empty_search_ignores_replacement_limit() {
    let long_replacement = "x".repeat(31);
    let result = replace("", &long_replacement, "hello");
    assert_eq!(result.display_text, "hello");
    assert_eq!(result.error, "");
  }

  #[test]
  fn empty_replacement_deletes_matches() {
    let result = replace("ね", "", "ねこねこ");
    assert_eq!(result.display_text, "ここ");
  }

  #[test]
  fn no_match_leaves_text_unchanged() {
    let replaced = try_replace("いぬ", "犬", "ねこがいる").unwrap();
    assert_eq!(replaced.text, "ねこがいる");
    assert_eq!(replaced.count, 0);
  }

  #[test]
  fn empty_text_yields_empty_result() {
    assert_eq!(replace("ねこ", "猫", ""), ReplacementResult::ok(""));
  }

  #[test]
  fn matches_do_not_overlap() {
    let replaced = replace_literal("aaaa", "aa", "a");
    assert_eq!(replaced.text, "aa");
    assert_eq!(replaced.count, 2);

    assert_eq!(replace("ああ", "あ", "ああああ").display_text, "ああ");
  }

  #[test]
  fn inserted_text_is_not_rescanned() {
    // 置換後文字列に検索文字列が含まれていても無限に置換しない
    let result = replace("ね", "ねね", "ねこ");
    assert_eq!(result.display_text, "ねねこ");
  }

  #[test]
  fn replace_literal_with_empty_needle_is_noop() {
    let replaced = replace_literal("abc", "", "x");
    assert_eq!(replaced.text, "abc");
    assert_eq!(replaced.count, 0);
  }

  #[test]
  fn search_too_long_passes_text_through() {
    let result = replace("01234567890", "x", "hello");
    assert_eq!(result.display_text, "hello");
    assert_eq!(result.error, "10文字以内で入力してください");
  }

  #[test]
  fn search_not_kana_passes_text_through() {
    let result = replace("abc", "x", "hello");
    assert_eq!(result.display_text, "hello");
    assert_eq!(result.error, "ひらがなまたはカタカナのみ入力できます");
  }

  #[test]
  fn replacement_too_long_passes_text_through() {
    let long_replacement = "猫".repeat(31);
    let err = try_replace("ねこ", &long_replacement, "ねこがいる").unwrap_err();
    assert_eq!(err, ValidationError::too_long(Field::Replacement, 31));

    let result = replace("ねこ", &long_replacement, "ねこがいる");
    assert_eq!(result.display_text, "ねこがいる");
    assert_eq!(result.error, "30文字以内で入力してください");
  }

  #[test]
  fn search_error_takes_priority_over_replacement_error() {
    let result = replace("abc", &"x".repeat(31), "hello");
    assert_eq!(result.error, "ひらがなまたはカタカナのみ入力できます");
  }

  #[test]
  fn matching_is_exact_code_point() {
    // ひらがなとカタカナ、全角と半角は区別する
    assert_eq!(replace("ねこ", "猫", "ネコ").display_text, "ネコ");
    assert_eq!(replace("カ", "か", "ｶ").display_text, "ｶ");
  }
}
