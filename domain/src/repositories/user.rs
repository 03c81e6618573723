use crate::DomainResult;
use crate::models::User;

/// ユーザーリポジトリ
#[async_trait::async_trait]
pub trait UserRepository {
    /// ユーザーをリストする。
    async fn list(&self) -> DomainResult<Vec<User>>;
}
