//! okikae-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use okikae_api::ApiError;
use okikae_api::api::{AppState, run_server};
use okikae_api::config::{Config, DEFAULT_LOG_FILTER, LOG_FILTER_ENV};
use okikae_api::service::OkikaeApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（OKIKAE_LOG → RUST_LOG → info の順）
  let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
    .or_else(|_| EnvFilter::try_from_default_env())
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    max_text_bytes = config.max_text_bytes,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(OkikaeApiServiceFull::new(&config));

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
