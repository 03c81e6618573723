pub mod repositories;

use sqlx::{Executor as _, PgPool};

use domain::DomainResult;

use crate::postgres::repositories::repository_error;

/// スキーマとtodosテーブルが存在することを保証する。
///
/// 開発環境の起動時にだけ呼び出す。DDLは冪等で、実行時にスキーマを
/// 変更するコードは存在しない。
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> DomainResult<()> {
    pool.execute(format!(r#"CREATE SCHEMA IF NOT EXISTS "{}""#, schema).as_str())
        .await
        .map_err(repository_error)?;
    pool.execute(
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS "{}".todos (
                id BIGINT PRIMARY KEY,
                user_id BIGINT NOT NULL,
                title TEXT NOT NULL CHECK (title <> ''),
                completed BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
            schema
        )
        .as_str(),
    )
    .await
    .map_err(repository_error)?;

    Ok(())
}
