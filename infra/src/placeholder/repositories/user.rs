use domain::{DomainResult, models::User, repositories::UserRepository};

use super::PlaceholderRepository;

/// 外部APIを参照するユーザーリポジトリ
pub type PlaceholderUserRepository = PlaceholderRepository<User>;

#[async_trait::async_trait]
impl UserRepository for PlaceholderUserRepository {
    /// ユーザーをリストする。
    async fn list(&self) -> DomainResult<Vec<User>> {
        self.get_json("/users").await
    }
}
