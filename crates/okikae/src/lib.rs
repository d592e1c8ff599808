//! okikae 文字列置換ライブラリー
//!
//! ひらがな・カタカナに限定した検索文字列で、テキスト中の文字列をリテラル置換する。
//! 状態を一切持たない純粋関数のみで構成され、HTTP サーバーや WebAssembly など
//! 任意のホストから呼び出せる。
//!
//! ```
//! let result = okikae::replace("ねこ", "猫", "ねこがいる");
//! assert_eq!(result.display_text, "猫がいる");
//! assert!(result.error.is_empty());
//! ```

/// 制約モジュール - 検索文字列・置換後文字列の長さ上限を定義
pub mod constraints;

/// エラーモジュール - ValidationError 等のエラー型を定義
pub mod errors;

/// かなモジュール - 検索文字列に許可する文字クラスを定義
pub mod kana;

/// データモデルモジュール - ValidationResult, ReplacementResult を定義
pub mod models;

/// 置換モジュール - 検証付きのリテラル置換を提供
pub mod replacer;

/// 検証モジュール - 検索文字列・置換後文字列の検証を提供
pub mod validator;

/// 再エクスポート
pub use constraints::{Field, MAX_REPLACEMENT_CHARS, MAX_SEARCH_CHARS};
pub use errors::ValidationError;
pub use models::{ReplacementResult, ValidationResult};
pub use replacer::{Replaced, replace, try_replace};
pub use validator::validate;
