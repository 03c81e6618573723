use domain::{DomainResult, models::Todo, repositories::TodoRepository};

pub struct TodoUseCase<R>
where
    R: TodoRepository,
{
    pub todo_repo: R,
}

impl<R> TodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(todo_repo: R) -> Self {
        Self { todo_repo }
    }

    /// Todoのリストを返す。
    ///
    /// 外部APIが返したレコードを加工せずにそのまま返す。
    pub async fn list(&self) -> DomainResult<Vec<Todo>> {
        self.todo_repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use domain::models::{TodoId, TodoTitle, UserId};

    use super::*;

    struct InMemoryTodoRepository {
        todos: Vec<Todo>,
    }

    #[async_trait::async_trait]
    impl TodoRepository for InMemoryTodoRepository {
        async fn list(&self) -> DomainResult<Vec<Todo>> {
            Ok(self.todos.clone())
        }
    }

    #[tokio::test]
    async fn todo_use_case_list() {
        let todos = vec![Todo {
            id: TodoId::from(1),
            user_id: UserId::from(1),
            title: TodoTitle::new(String::from("delectus aut autem")).unwrap(),
            completed: false,
        }];
        let use_case = TodoUseCase::new(InMemoryTodoRepository {
            todos: todos.clone(),
        });

        let listed = use_case.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, todos[0].id);
        assert_eq!(listed[0].title.0, todos[0].title.0);
    }
}
