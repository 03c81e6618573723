use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use domain::models::User;
use use_case::user::UserUseCase;

use crate::{
    AppState,
    http::{ApiError, ApiResult},
    placeholder::repositories::PlaceholderUserRepository,
};

/// ユーザーリストのクエリパラメータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQueryParams {
    /// ユーザー数をレスポンスに含めるかどうか
    pub count: Option<bool>,
}

/// ユーザーリストレスポンスボディ
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponseBody {
    /// ユーザー数
    ///
    /// `count=true`を指定した場合のみレスポンスに含まれる。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// ユーザーのリスト
    pub users: Vec<User>,
}

/// ユーザーリストハンドラ
///
/// 外部APIから取得したユーザーのリストを返す。`count=true`を指定した場合は
/// レスポンスをユーザー数とユーザーのリストで包む。
#[tracing::instrument(skip(app_state))]
pub async fn list(
    State(app_state): State<AppState>,
    query: Query<UserListQueryParams>,
) -> ApiResult<Json<UserListResponseBody>> {
    let user_repo = PlaceholderUserRepository::new(
        app_state.http_client.clone(),
        app_state.app_settings.placeholder.clone(),
    );
    let use_case = UserUseCase::new(user_repo);
    let users = use_case.list().await.map_err(ApiError::from)?;
    let count = if query.0.count.unwrap_or(false) {
        Some(users.len())
    } else {
        None
    };
    Ok(Json(UserListResponseBody { count, users }))
}
