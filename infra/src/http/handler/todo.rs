use axum::{Json, extract::State};

use domain::models::Todo;
use use_case::todo::TodoUseCase;

use crate::{
    AppState,
    http::{ApiError, ApiResult},
    placeholder::repositories::PlaceholderTodoRepository,
};

/// Todoリストハンドラ
///
/// 外部APIから取得したTodoのリストを、ページングせずにそのまま返す。
/// 外部APIの障害と不正なレスポンスボディはサーバーエラーとして返す。
#[tracing::instrument(skip(app_state))]
pub async fn list(State(app_state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todo_repo = PlaceholderTodoRepository::new(
        app_state.http_client.clone(),
        app_state.app_settings.placeholder.clone(),
    );
    let use_case = TodoUseCase::new(todo_repo);
    let todos = use_case.list().await.map_err(ApiError::from)?;
    Ok(Json(todos))
}
