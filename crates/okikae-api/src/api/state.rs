//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::OkikaeApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Validation and Replacement Service
  ///
  /// - Production: `Arc::new(OkikaeApiServiceFull::new(&config))`
  /// - Test: `Arc::new(StubOkikaeApiService)`
  pub service: Arc<dyn OkikaeApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn OkikaeApiService>) -> Self {
    Self { config, service }
  }
}
