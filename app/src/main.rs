use anyhow::Context as _;

use infra::AppState;

use app::{
    bind_address, create_pg_pool, get_subscriber, init_subscriber, load_app_settings,
    routes::create_router, validate_startup,
};

/// アプリケーションエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ロギングを初期化
    let subscriber = get_subscriber(
        settings::APPLICATION_NAME.to_string(),
        log::Level::Info,
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // アプリケーション設定を環境変数から読み込み
    let app_settings = load_app_settings()?;
    tracing::info!("App settings: {:?}", app_settings);

    // データベース接続プールを作成
    let pool = create_pg_pool(&app_settings.database).await?;

    // 起動時検証を実行
    //
    // 失敗した場合はHTTPサーバーを起動せずにプロセスを終了する。
    validate_startup(&app_settings, &pool).await?;

    // ルーターを作成
    let app_state = AppState {
        app_settings: app_settings.clone(),
        pg_pool: pool,
        http_client: reqwest::Client::new(),
    };
    let router = create_router(app_state);

    // HTTPサーバーを起動
    let (listener, port) = bind_address(&app_settings.http).await?;
    tracing::info!("HTTP server is running on port {}", port);
    axum::serve(listener, router)
        .await
        .context("Failed to start the HTTP server")?;

    Ok(())
}
