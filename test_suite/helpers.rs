//! This module sets up and runs integration tests
//!
//! The tests spawn the real application router on an ephemeral port and
//! drive it over HTTP. The external placeholder API is replaced by a local
//! stub server, also bound to an ephemeral port, so the tests control the
//! payload and the status code the application receives.
//!
//! Tests that need a live PostgreSQL server create a separate test database
//! named `test_placeholder_db_<uuid>`, where `<uuid>` is the UUID with
//! hyphens replaced by underscores, and are marked with `#[ignore]`.
//!
//! [NOTICE]
//!
//! A test database is created for each ignored test run, so you must drop
//! the test databases afterwards.
use std::thread::JoinHandle;

use axum::{Json, Router, http::StatusCode, routing::get};
use secrecy::SecretString;
use sqlx::{Connection as _, Executor as _, PgConnection, PgPool, postgres::PgPoolOptions};
use tokio::{net::TcpListener, sync::oneshot};

use app::routes::create_router;
use infra::AppState;
use settings::{
    AppSettings, DatabaseSettings, Environment, HttpServerSettings, PlaceholderSettings,
};

pub const TEST_DATABASE_PREFIX: &str = "test_placeholder_db_";

/// Returns the application settings used by integration tests.
///
/// The database settings match the development docker-compose defaults; only
/// the ignored tests in `startup.rs` actually connect to the database.
pub fn load_app_settings_for_testing(placeholder_base_url: String) -> AppSettings {
    AppSettings {
        environment: Environment::Development,
        http: HttpServerSettings {
            host: String::from("127.0.0.1"),
            port: 0,
        },
        database: DatabaseSettings {
            host: String::from("localhost"),
            port: 5432,
            user: String::from("postgres"),
            password: SecretString::from("password"),
            name: String::from("placeholder_api"),
            schema: String::from("public"),
            max_connections: 2,
            connection_timeout: 3,
        },
        placeholder: PlaceholderSettings {
            base_url: placeholder_base_url,
        },
    }
}

/// Returns the todos payload served by the stub, in the shape of the demo API.
pub fn todos_fixture() -> serde_json::Value {
    serde_json::json!([
        {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
        {"userId": 1, "id": 2, "title": "quis ut nam facilis et officia qui", "completed": false},
        {"userId": 2, "id": 3, "title": "fugiat veniam minus", "completed": true}
    ])
}

/// Returns the users payload served by the stub, in the shape of the demo API.
pub fn users_fixture() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"},
        {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}
    ])
}

pub struct TestApp {
    pub app_settings: AppSettings,
    pub listener: TcpListener,
    pub pg_pool: PgPool,
}

pub async fn configure_test_app(mut app_settings: AppSettings) -> TestApp {
    // The routes under test never touch the database, so a lazy pool that
    // would connect on first use is enough.
    let pg_pool = PgPoolOptions::new().connect_lazy_with(app_settings.database.connect_options());

    // Specify a random port for the HTTP server to bind
    app_settings.http.port = 0;
    let (listener, port) = app::bind_address(&app_settings.http).await.unwrap();
    app_settings.http.port = port;

    TestApp {
        app_settings,
        listener,
        pg_pool,
    }
}

/// Sets up a throwaway PostgreSQL database for the startup validation tests
pub async fn setup_database(settings: &DatabaseSettings) -> PgPool {
    // Connect to the **postgres** database
    let postgres_settings = DatabaseSettings {
        name: String::from("postgres"),
        ..settings.clone()
    };
    let mut conn = PgConnection::connect_with(&postgres_settings.connect_options())
        .await
        .unwrap();

    // Create the test database
    conn.execute(format!("CREATE DATABASE {};", settings.name).as_str())
        .await
        .unwrap();

    PgPool::connect_with(settings.connect_options()).await.unwrap()
}

/// Spawns the application server in a separate thread
///
/// Returns a tuple containing the thread handle and a sender to signal for graceful shutdown.
pub async fn spawn_app(
    app_state: AppState,
    listener: TcpListener,
) -> (JoinHandle<()>, oneshot::Sender<()>) {
    let (close_tx, close_rx) = oneshot::channel();

    let handle = std::thread::spawn(|| run_server(app_state, listener, close_rx));
    (handle, close_tx)
}

/// Runs the application server with graceful shutdown support
fn run_server(app_state: AppState, listener: TcpListener, close_rx: oneshot::Receiver<()>) {
    let router = create_router(app_state);
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                _ = close_rx.await;
            })
            .await
            .unwrap();
    });
}

/// A stub of the external placeholder API
///
/// Serves the given payloads for `/todos` and `/users` with the given status
/// code on an ephemeral port.
pub struct PlaceholderStub {
    pub base_url: String,
    handle: JoinHandle<()>,
    shutdown_signal: oneshot::Sender<()>,
}

pub async fn spawn_placeholder_stub(
    status: StatusCode,
    todos: serde_json::Value,
    users: serde_json::Value,
) -> PlaceholderStub {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let router = Router::new()
        .route("/todos", get(move || async move { (status, Json(todos)) }))
        .route("/users", get(move || async move { (status, Json(users)) }));

    let (close_tx, close_rx) = oneshot::channel();
    let handle = std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    _ = close_rx.await;
                })
                .await
                .unwrap();
        });
    });

    PlaceholderStub {
        base_url: format!("http://127.0.0.1:{}", port),
        handle,
        shutdown_signal: close_tx,
    }
}

impl PlaceholderStub {
    pub fn end(self) {
        self.shutdown_signal.send(()).unwrap();
        self.handle.join().unwrap();
    }
}

pub struct ResponseParts {
    /// ステータスコード
    pub status_code: reqwest::StatusCode,
    /// ヘッダ
    pub headers: reqwest::header::HeaderMap,
    /// ボディ
    pub body: String,
}

pub async fn split_response(response: reqwest::Response) -> ResponseParts {
    ResponseParts {
        status_code: response.status(),
        headers: response.headers().clone(),
        body: response.text().await.unwrap().to_string(),
    }
}
