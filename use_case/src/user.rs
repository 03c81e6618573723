use domain::{DomainResult, models::User, repositories::UserRepository};

pub struct UserUseCase<R>
where
    R: UserRepository,
{
    pub user_repo: R,
}

impl<R> UserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R) -> Self {
        Self { user_repo }
    }

    /// ユーザーのリストを返す。
    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.user_repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use domain::models::UserId;

    use super::*;

    struct InMemoryUserRepository {
        users: Vec<User>,
    }

    #[async_trait::async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn list(&self) -> DomainResult<Vec<User>> {
            Ok(self.users.clone())
        }
    }

    #[tokio::test]
    async fn user_use_case_list() {
        let users = vec![
            User {
                id: UserId::from(1),
                name: Some(String::from("Leanne Graham")),
                username: Some(String::from("Bret")),
                email: Some(String::from("Sincere@april.biz")),
            },
            User {
                id: UserId::from(2),
                name: None,
                username: None,
                email: None,
            },
        ];
        let use_case = UserUseCase::new(InMemoryUserRepository {
            users: users.clone(),
        });

        let listed = use_case.list().await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, users[0].id);
        assert_eq!(listed[1].name, None);
    }
}
