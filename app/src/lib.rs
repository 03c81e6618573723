pub mod routes;

use std::time::Duration;

use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt as _};

use infra::postgres::{ensure_schema, repositories::PgDiagnosticsRepository};
use settings::{AppSettings, DatabaseSettings, Environment, HttpServerSettings};
use use_case::diagnostics::DiagnosticsUseCase;

/// 環境変数からアプリケーション設定を読み込む。
///
/// 必須の環境変数が不足している場合、エラーには不足しているすべての
/// 環境変数の名前が含まれる。
pub fn load_app_settings() -> anyhow::Result<AppSettings> {
    AppSettings::from_env()
        .context("Failed to load the application settings from environment variables")
}

pub async fn bind_address(settings: &HttpServerSettings) -> anyhow::Result<(TcpListener, u16)> {
    let listener = TcpListener::bind(settings.bind_address())
        .await
        .context("Failed to bind to the address for the HTTP server")?;
    let port = listener
        .local_addr()
        .context("Failed to get the port of listener")?
        .port();

    Ok((listener, port))
}

pub async fn create_pg_pool(
    settings: &DatabaseSettings,
) -> anyhow::Result<sqlx::Pool<sqlx::Postgres>> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.connection_timeout))
        .connect_with(settings.connect_options())
        .await
        .context("Failed to connect to the database")
}

/// 起動時検証を実行する。
///
/// 開発環境の場合は、スキーマとtodosテーブルが存在することを保証する。
/// その後、設定されたスキーマのテーブル名をリストしてログに記録する。
/// いずれかが失敗した場合、HTTPサーバーは起動しない。
pub async fn validate_startup(
    settings: &AppSettings,
    pool: &sqlx::PgPool,
) -> anyhow::Result<Vec<String>> {
    if settings.environment == Environment::Development {
        ensure_schema(pool, &settings.database.schema)
            .await
            .context("Failed to ensure the database schema")?;
    }
    let diagnostics_repo = PgDiagnosticsRepository::new(pool.clone());
    let use_case = DiagnosticsUseCase::new(diagnostics_repo);
    use_case
        .report_tables(&settings.database.schema)
        .await
        .context("Failed to list the tables in the database schema")
}

pub fn get_subscriber<Sink>(
    name: String,
    log_level: log::Level,
    sink: Sink,
) -> impl Subscriber + Sync + Send
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
