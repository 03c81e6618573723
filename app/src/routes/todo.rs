use axum::{Router, routing::get};

use infra::{AppState, http::handler::todo::list};

pub fn create_todo_routes(app_state: AppState) -> Router<AppState> {
    Router::new().route("/", get(list)).with_state(app_state)
}
