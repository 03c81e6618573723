pub mod todo;
pub mod user;

use axum::{Json, extract::State};
use serde::Serialize;
use time::{OffsetDateTime, serde::rfc3339};

use settings::APPLICATION_NAME;

use crate::AppState;

/// ヘルスチェックレスポンスボディ
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponseBody {
    /// アプリケーションの状態
    pub status: &'static str,
    /// 設定されたデータベース名
    pub database: String,
    /// アプリケーション名
    pub application: &'static str,
    /// 現在日時
    #[serde(serialize_with = "rfc3339::serialize")]
    pub timestamp: OffsetDateTime,
}

/// ヘルスチェックハンドラ
///
/// データベースにも外部APIにもアクセスせず、常に成功する。
#[tracing::instrument(skip(app_state))]
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthCheckResponseBody> {
    Json(HealthCheckResponseBody {
        status: "healthy",
        database: app_state.app_settings.database.name.clone(),
        application: APPLICATION_NAME,
        timestamp: OffsetDateTime::now_utc(),
    })
}
