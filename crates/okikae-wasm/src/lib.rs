//! okikae-wasm crate
//!
//! WebAssembly bindings that expose validation and replacement to a browser form.
//! The exported names match what the form calls after instantiating the module:
//!
//! ```js
//! const { isValid, message } = validateKanaWasm(input);
//! const { displayText, error } = replaceTextWasm(search, replacement, text);
//! ```
//!
//! Module instantiation is owned by the host. Both functions are stateless.
//! Arguments are typed `&str`, so a missing or non-string argument throws in JS
//! before any of this code runs.

use wasm_bindgen::prelude::*;

/// Validation result handed to JS
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaValidation {
  is_valid: bool,
  message: String,
}

#[wasm_bindgen]
impl KanaValidation {
  /// Whether the search string satisfies every constraint
  #[wasm_bindgen(getter, js_name = isValid)]
  pub fn is_valid(&self) -> bool {
    self.is_valid
  }

  /// User-facing message (empty when valid)
  #[wasm_bindgen(getter)]
  pub fn message(&self) -> String {
    self.message.clone()
  }
}

impl From<okikae::ValidationResult> for KanaValidation {
  fn from(result: okikae::ValidationResult) -> Self {
    Self {
      is_valid: result.is_valid,
      message: result.message,
    }
  }
}

/// Replacement result handed to JS
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReplacement {
  display_text: String,
  error: String,
}

#[wasm_bindgen]
impl TextReplacement {
  /// Text to display
  #[wasm_bindgen(getter, js_name = displayText)]
  pub fn display_text(&self) -> String {
    self.display_text.clone()
  }

  /// User-facing error message (empty on success)
  #[wasm_bindgen(getter)]
  pub fn error(&self) -> String {
    self.error.clone()
  }
}

impl From<okikae::ReplacementResult> for TextReplacement {
  fn from(result: okikae::ReplacementResult) -> Self {
    Self {
      display_text: result.display_text,
      error: result.error,
    }
  }
}

/// Validates the search string (kana only, up to 10 characters)
#[wasm_bindgen(js_name = validateKanaWasm)]
pub fn validate_kana_wasm(input: &str) -> KanaValidation {
  okikae::validate(input).into()
}

/// Replaces every occurrence of `search` in `text` with `replacement`
#[wasm_bindgen(js_name = replaceTextWasm)]
pub fn replace_text_wasm(search: &str, replacement: &str, text: &str) -> TextReplacement {
  okikae::replace(search, replacement, text).into()
}
