pub mod http;
pub mod placeholder;
pub mod postgres;

use settings::AppSettings;

/// アプリケーション状態
///
/// リクエストごとにクローンして使用する。HTTPクライアントは内部で参照
/// カウントされるため、並行するリクエストから安全に再利用できる。
#[derive(Clone)]
pub struct AppState {
    pub app_settings: AppSettings,
    pub pg_pool: sqlx::PgPool,
    pub http_client: reqwest::Client,
}
