//! HTTPハンドラー定義
//!
//! 検証・置換はいずれも軽い処理のため、spawn_blocking を使わず同期的に実行する。

use axum::{Json, extract::State};
use okikae::ValidationResult;
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{ReplaceRequest, ReplaceResponse, ValidateRequest};

use super::state::AppState;

/// POST /validate エンドポイント
///
/// 検索文字列を検証する。入力のたびに呼ばれることを想定している。
///
/// # Request Body
/// ```json
/// { "input": "ねこ" }
/// ```
///
/// # Response
/// - 200 OK: `{ "isValid": bool, "message": string }`（違反時も 200）
/// - 4xx: JSON が不正
pub async fn post_validate(
  State(state): State<AppState>,
  Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidationResult>, ApiError> {
  debug!(input_len = request.input.len(), "検証リクエストを受信");

  let result = state.service.validate(request)?;

  debug!(is_valid = result.is_valid, "検証完了");

  Ok(Json(result))
}

/// POST /replace エンドポイント
///
/// テキスト中の検索文字列を置換後文字列に置換する。
///
/// # Request Body
/// ```json
/// { "search": "ねこ", "replacement": "猫", "text": "ねこがいる" }
/// ```
///
/// # Response
/// - 200 OK: `{ "displayText": string, "error": string, "replacements": number }`
/// - 400 Bad Request: テキストが上限を超えている
/// - 4xx: JSON が不正、またはフィールドが欠けている
pub async fn post_replace(
  State(state): State<AppState>,
  Json(request): Json<ReplaceRequest>,
) -> Result<Json<ReplaceResponse>, ApiError> {
  debug!(
    search_len = request.search.len(),
    replacement_len = request.replacement.len(),
    text_len = request.text.len(),
    "置換リクエストを受信"
  );

  let response = state.service.replace(request)?;

  info!(
    replacements = response.replacements,
    has_error = !response.error.is_empty(),
    "置換完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
