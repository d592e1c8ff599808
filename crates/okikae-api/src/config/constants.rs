//! API設定の定数定義

/// 置換対象テキストの最大長（バイト単位）のデフォルト値
///
/// 1MB までのテキストを許可する。
/// リクエストボディ上限はこの値から [`Config::body_limit_bytes`](super::Config::body_limit_bytes) で導出する。
pub const DEFAULT_MAX_TEXT_BYTES: usize = 1_000_000;

/// JSON エスケープによるテキストの最大膨張率
///
/// 制御文字は `\u0000` 形式になり、1 バイトが 6 バイトになる。
pub const JSON_ESCAPE_FACTOR: usize = 6;

/// テキスト以外のリクエストボディ（キー名、検索文字列、置換後文字列）の余裕分（バイト単位）
pub const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost のポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// デフォルトのログフィルター
pub const DEFAULT_LOG_FILTER: &str = "info";

/// ログフィルターを指定する環境変数名
///
/// 未設定なら `RUST_LOG`、それも未設定なら [`DEFAULT_LOG_FILTER`] を使う。
pub const LOG_FILTER_ENV: &str = "OKIKAE_LOG";

/// バインドアドレスを指定する環境変数名
pub const BIND_ADDR_ENV: &str = "OKIKAE_API_BIND_ADDR";

/// テキスト最大長を指定する環境変数名
pub const MAX_TEXT_BYTES_ENV: &str = "OKIKAE_API_MAX_TEXT_BYTES";
