use std::{thread::JoinHandle, time::Duration};

use tokio::sync::oneshot;

use infra::AppState;
use settings::AppSettings;

use crate::helpers::{TestApp, configure_test_app, spawn_app};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Test case for integration tests
///
/// Spawns the application server on an ephemeral port when the test case
/// begins, and shuts it down gracefully when the test case ends.
pub struct TestCase {
    pub app_state: AppState,
    app_handle: JoinHandle<()>,
    shutdown_signal: oneshot::Sender<()>,
    pub http_client: reqwest::Client,
}

impl TestCase {
    pub async fn begin(app_settings: AppSettings) -> Self {
        let app = configure_test_app(app_settings).await;
        let TestApp {
            app_settings,
            listener,
            pg_pool,
        } = app;
        let app_state = AppState {
            app_settings,
            pg_pool,
            http_client: reqwest::Client::new(),
        };
        let (app_handle, shutdown_signal) = spawn_app(app_state.clone(), listener).await;
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();
        Self {
            app_state,
            app_handle,
            shutdown_signal,
            http_client,
        }
    }

    pub async fn end(self) {
        self.shutdown_signal.send(()).unwrap();
        self.app_handle.join().unwrap();
    }

    pub fn origin(&self) -> String {
        format!(
            "http://{}:{}",
            self.app_state.app_settings.http.host, self.app_state.app_settings.http.port,
        )
    }

    pub async fn get_health(&self) -> reqwest::Response {
        let uri = format!("{}/health", self.origin());
        self.http_client.get(&uri).send().await.unwrap()
    }

    pub async fn todo_list(&self) -> reqwest::Response {
        let uri = format!("{}/todos", self.origin());
        self.http_client.get(&uri).send().await.unwrap()
    }

    pub async fn user_list(&self, count: Option<bool>) -> reqwest::Response {
        let uri = match count {
            Some(count) => format!("{}/users?count={}", self.origin(), count),
            None => format!("{}/users", self.origin()),
        };
        self.http_client.get(&uri).send().await.unwrap()
    }
}
