//! 入力制約の定数定義
//!
//! 上限はプロセス全体で不変。長さはバイト数ではなく Unicode スカラー値（`char`）の個数で数える。

use std::fmt;

/// 検索文字列の最大長（文字数）
pub const MAX_SEARCH_CHARS: usize = 10;

/// 置換後文字列の最大長（文字数）
///
/// 置換後文字列は自由入力のため、文字クラスの制約はない。
pub const MAX_REPLACEMENT_CHARS: usize = 30;

/// Input field subject to a length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  /// Search string (kana only)
  Search,
  /// Replacement string (free-form)
  Replacement,
}

impl Field {
  /// Returns the maximum number of characters accepted for this field.
  ///
  /// # Examples
  /// - `Field::Search` → `10`
  /// - `Field::Replacement` → `30`
  #[must_use]
  pub fn max_chars(&self) -> usize {
    match self {
      Field::Search => MAX_SEARCH_CHARS,
      Field::Replacement => MAX_REPLACEMENT_CHARS,
    }
  }

  /// Returns the field name used in logs.
  #[must_use]
  pub fn name(&self) -> &'static str {
    match self {
      Field::Search => "search",
      Field::Replacement => "replacement",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// 文字数を返す（`char` 単位）
#[must_use]
pub fn char_len(input: &str) -> usize {
  input.chars().count()
}
