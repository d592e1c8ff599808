//! ルーター定義

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{health_check, post_replace, post_validate};
use super::state::AppState;
use crate::errors::{ApiError, Result};

/// APIルーターを作成する
///
/// リクエストボディ上限は設定のテキスト上限から導出する。
/// 上限内のテキストが 413 で弾かれることはなく、超過分はサービス層で `text_too_long` になる。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  let body_limit = state.config.body_limit_bytes();

  Router::new()
    .route("/validate", post(post_validate))
    .route("/replace", post(post_replace))
    .route("/health", get(health_check))
    .layer(DefaultBodyLimit::max(body_limit))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動し、Ctrl+C を受け取るまでリクエストを処理する
///
/// # Errors
/// - 待ち受けアドレスにバインドできない（設定エラー）
/// - サーバー実行中のエラー（内部エラー）
pub async fn run_server(state: AppState) -> Result<()> {
  let listener = bind_listener(&state.config.bind_addr).await?;
  let local_addr = listener
    .local_addr()
    .map_err(|e| ApiError::internal(format!("待ち受けアドレスを取得できません: {e}")))?;

  info!(
    %local_addr,
    body_limit_bytes = state.config.body_limit_bytes(),
    "リクエストの受付を開始します"
  );

  axum::serve(listener, create_router(state))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {e}")))?;

  info!("サーバーを停止しました");
  Ok(())
}

/// 指定アドレスで TCP の待ち受けを開始する
async fn bind_listener(addr: &str) -> Result<TcpListener> {
  TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("{addr} にバインドできません: {e}")))
}

/// Ctrl+C を待つ
///
/// ハンドラーを登録できなければ停止シグナルなしで動き続ける。
async fn shutdown_signal() {
  match tokio::signal::ctrl_c().await {
    Ok(()) => info!("停止シグナルを受信しました"),
    Err(e) => {
      warn!(error = %e, "停止シグナルのハンドラーを登録できませんでした");
      std::future::pending::<()>().await;
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::config::Config;
  use crate::service::OkikaeApiServiceFull;

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:5541".to_string(),
      max_text_bytes: 1_000,
    };
    let service = Arc::new(OkikaeApiServiceFull::new(&config));
    AppState::new(config, service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
    // ルーターが正常に作成できることを確認
  }

  #[tokio::test]
  async fn bind_listener_on_ephemeral_port() {
    let listener = bind_listener("127.0.0.1:0").await.expect("ephemeral port should bind");
    let addr = listener.local_addr().unwrap();
    assert_ne!(addr.port(), 0);
  }

  #[tokio::test]
  async fn bind_listener_rejects_malformed_addr() {
    let err = bind_listener("not-an-address").await.unwrap_err();
    assert_eq!(err.code(), "config_error");
    assert!(err.to_string().contains("not-an-address"));
  }
}
