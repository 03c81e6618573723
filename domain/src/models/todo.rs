use garde::Validate as _;
use serde::{Deserialize, Serialize};

use crate::impl_string_primitive;
use crate::models::primitives::Id;
use crate::models::user::UserId;

/// Todo ID
pub type TodoId = Id<Todo>;

/// Todoタイトル
///
/// 空文字列は許可しない。
#[derive(Debug, Clone, garde::Validate)]
pub struct TodoTitle(#[garde(length(chars, min = 1))] pub String);
impl_string_primitive!(TodoTitle);

impl Serialize for TodoTitle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoTitle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TodoTitle::new(value).map_err(serde::de::Error::custom)
    }
}

/// Todo
///
/// 外部APIのレスポンスからリクエストごとに構築する受動的なレコードで、
/// リクエストの範囲を超えるライフサイクルを持たない。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// ID
    pub id: TodoId,
    /// 所有するユーザーのID
    pub user_id: UserId,
    /// タイトル
    pub title: TodoTitle,
    /// 完了フラグ
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(String::from("delectus aut autem"), true)]
    #[case(String::from("a"), true)]
    #[case(String::new(), false)]
    #[case(String::from("  "), false)]
    fn todo_title_new(#[case] value: String, #[case] expected: bool) {
        let title = TodoTitle::new(value);
        assert_eq!(title.is_ok(), expected);
    }

    /// 外部APIのレスポンスボディと同じ形式のJSONをデシリアライズできる。
    #[test]
    fn todo_deserialize() {
        let json = r#"{"userId": 1, "id": 3, "title": "fugiat veniam minus", "completed": false}"#;

        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo.id, TodoId::from(3));
        assert_eq!(todo.user_id, UserId::from(1));
        assert_eq!(todo.title.0, "fugiat veniam minus");
        assert!(!todo.completed);
    }

    /// `userId`はキャメルケースでシリアライズされる。
    #[test]
    fn todo_serialize() {
        let todo = Todo {
            id: TodoId::from(3),
            user_id: UserId::from(1),
            title: TodoTitle::new(String::from("fugiat veniam minus")).unwrap(),
            completed: true,
        };

        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["userId"], 1);
        assert_eq!(value["title"], "fugiat veniam minus");
        assert_eq!(value["completed"], true);
    }

    /// タイトルが空のJSONはデシリアライズに失敗する。
    #[test]
    fn todo_deserialize_with_an_empty_title() {
        let json = r#"{"userId": 1, "id": 3, "title": "", "completed": false}"#;

        let result = serde_json::from_str::<Todo>(json);

        assert!(result.is_err());
    }
}
