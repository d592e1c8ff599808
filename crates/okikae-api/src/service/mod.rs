//! service module
mod okikae_api_service;

pub use okikae_api_service::{OkikaeApiService, OkikaeApiServiceFull};
