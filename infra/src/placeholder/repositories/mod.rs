mod todo;
mod user;

pub use todo::*;
pub use user::*;

use std::marker::PhantomData;

use domain::{DomainError, DomainResult};
use settings::PlaceholderSettings;

/// 外部APIリポジトリ
///
/// 共有のHTTPクライアントと設定されたベースURLで外部APIへアクセスする。
/// リトライ、タイムアウトの上書き、レスポンスのキャッシュは行わない。
pub struct PlaceholderRepository<T> {
    pub client: reqwest::Client,
    pub settings: PlaceholderSettings,
    pub _marker: PhantomData<T>,
}

impl<T> PlaceholderRepository<T> {
    pub fn new(client: reqwest::Client, settings: PlaceholderSettings) -> Self {
        Self {
            client,
            settings,
            _marker: PhantomData,
        }
    }

    /// 指定したパスへGETリクエストを送信して、レスポンスボディをデシリアライズする。
    ///
    /// トランスポートエラー、成功以外のステータスコード、デシリアライズの失敗は
    /// すべてログに記録して外部APIエラーとして返す。部分的なレスポンスは合成しない。
    pub(crate) async fn get_json<U>(&self, path: &str) -> DomainResult<U>
    where
        U: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.settings.base_url, path);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to request {}: {}", url, e);
            external_api_error(e)
        })?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!("Received unexpected status code {} from {}", status, url);
            return Err(DomainError::ExternalApi(
                format!("unexpected status code {} from {}", status, url).into(),
            ));
        }
        response.json::<U>().await.map_err(|e| {
            tracing::error!("Failed to deserialize the response body from {}: {}", url, e);
            external_api_error(e)
        })
    }
}

/// 外部APIエラーを生成する。
pub fn external_api_error<E: std::error::Error>(e: E) -> DomainError {
    DomainError::ExternalApi(e.to_string().into())
}
