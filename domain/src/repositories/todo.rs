use crate::DomainResult;
use crate::models::Todo;

/// Todoリポジトリ
#[async_trait::async_trait]
pub trait TodoRepository {
    /// Todoをリストする。
    async fn list(&self) -> DomainResult<Vec<Todo>>;
}
