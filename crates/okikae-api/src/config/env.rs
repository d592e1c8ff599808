//! Config loading from environment variables

use super::constants::{
  BIND_ADDR_ENV, BODY_OVERHEAD_BYTES, DEFAULT_BIND_ADDR, DEFAULT_MAX_TEXT_BYTES,
  JSON_ESCAPE_FACTOR, MAX_TEXT_BYTES_ENV,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Maximum accepted size of the `text` field (bytes)
  pub max_text_bytes: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// Unset keys fall back to their defaults.
  ///
  /// # Errors
  /// - `OKIKAE_API_BIND_ADDR` is empty
  /// - `OKIKAE_API_MAX_TEXT_BYTES` is not a positive integer
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    if bind_addr.trim().is_empty() {
      return Err(ApiError::config(format!("{BIND_ADDR_ENV} が空です")));
    }

    let max_text_bytes = match lookup(MAX_TEXT_BYTES_ENV) {
      Some(raw) => parse_max_text_bytes(&raw)?,
      None => DEFAULT_MAX_TEXT_BYTES,
    };

    Ok(Self {
      bind_addr,
      max_text_bytes,
    })
  }
}

impl Config {
  /// Returns the request body limit for the router
  ///
  /// Large enough that any `text` within `max_text_bytes` is never cut off by the
  /// body limit, even when fully JSON-escaped, so oversized text always reaches the
  /// service and is reported as `text_too_long`.
  #[must_use]
  pub fn body_limit_bytes(&self) -> usize {
    self
      .max_text_bytes
      .saturating_mul(JSON_ESCAPE_FACTOR)
      .saturating_add(BODY_OVERHEAD_BYTES)
  }
}

fn parse_max_text_bytes(raw: &str) -> crate::errors::Result<usize> {
  let value = raw.trim().parse::<usize>().map_err(|e| {
    ApiError::config(format!("{MAX_TEXT_BYTES_ENV} が不正です: value={raw}, error={e}"))
  })?;

  if value < 1 {
    return Err(ApiError::config(format!(
      "{MAX_TEXT_BYTES_ENV} は 1 以上である必要があります: actual={value}"
    )));
  }

  Ok(value)
}
