pub mod handler;

use std::borrow::Cow;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use domain::DomainError;

/// API結果
pub type ApiResult<T> = Result<T, ApiError>;

/// APIエラー
#[derive(Debug)]
pub struct ApiError {
    /// HTTPステータスコード
    pub status_code: StatusCode,
    /// エラーメッセージ
    pub messages: Vec<Cow<'static, str>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "messages": self.messages,
        });
        (self.status_code, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let status_code = match &error {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            // 外部APIの障害と不正なレスポンスボディはゲートウェイエラーとして返す
            DomainError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status_code,
            messages: vec![error.to_string().into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(DomainError::Validation("invalid".into()), StatusCode::BAD_REQUEST)]
    #[case(DomainError::ExternalApi("bad gateway".into()), StatusCode::BAD_GATEWAY)]
    #[case(
        DomainError::Repository("connection refused".into()),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(
        DomainError::Unexpected("unexpected".into()),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn api_error_from_domain_error(#[case] error: DomainError, #[case] expected: StatusCode) {
        let message = error.to_string();

        let api_error = ApiError::from(error);

        assert_eq!(api_error.status_code, expected);
        assert_eq!(api_error.messages, vec![Cow::from(message)]);
    }
}
