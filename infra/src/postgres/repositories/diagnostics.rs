use sqlx::PgPool;

use domain::{DomainResult, repositories::DiagnosticsRepository};

use super::repository_error;

/// PostgreSQLスキーマ診断リポジトリ
pub struct PgDiagnosticsRepository {
    pub pool: PgPool,
}

impl PgDiagnosticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DiagnosticsRepository for PgDiagnosticsRepository {
    /// スキーマに存在するテーブルの名前をリストする。
    ///
    /// `table_name`列は`sql_identifier`ドメイン型のため、`text`へキャストして取得する。
    /// スキーマが存在しない場合は空のリストを返す。
    async fn table_names(&self, schema: &str) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = $1
            ORDER BY table_name
            "#,
        )
        .bind(schema)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)
    }
}
