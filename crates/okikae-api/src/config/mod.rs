//! Config module

mod constants;
mod env;

pub use constants::{
  BIND_ADDR_ENV, BODY_OVERHEAD_BYTES, DEFAULT_BIND_ADDR, DEFAULT_LOG_FILTER,
  DEFAULT_MAX_TEXT_BYTES, JSON_ESCAPE_FACTOR, LOG_FILTER_ENV, MAX_TEXT_BYTES_ENV,
};
pub use env::Config;
