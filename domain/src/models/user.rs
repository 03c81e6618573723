use serde::{Deserialize, Serialize};

use crate::models::primitives::Id;

/// ユーザーID
pub type UserId = Id<User>;

/// ユーザー
///
/// ID以外のフィールドはすべて任意で、外部APIのレスポンスに存在しない
/// 場合は`None`になる。未知のフィールドは無視する。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// ID
    pub id: UserId,
    /// 表示名
    pub name: Option<String>,
    /// ログイン名
    pub username: Option<String>,
    /// Eメールアドレス
    pub email: Option<String>,
}
