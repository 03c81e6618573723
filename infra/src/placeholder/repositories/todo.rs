use domain::{DomainResult, models::Todo, repositories::TodoRepository};

use super::PlaceholderRepository;

/// 外部APIを参照するTodoリポジトリ
pub type PlaceholderTodoRepository = PlaceholderRepository<Todo>;

#[async_trait::async_trait]
impl TodoRepository for PlaceholderTodoRepository {
    /// Todoをリストする。
    async fn list(&self) -> DomainResult<Vec<Todo>> {
        self.get_json("/todos").await
    }
}
