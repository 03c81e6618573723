use domain::{DomainResult, repositories::DiagnosticsRepository};

/// スキーマ診断ユースケース
///
/// 起動時検証で、設定されたスキーマのテーブル名をリストしてログに記録する。
/// アプリケーションロジックでは使用しない。
pub struct DiagnosticsUseCase<R>
where
    R: DiagnosticsRepository,
{
    pub diagnostics_repo: R,
}

impl<R> DiagnosticsUseCase<R>
where
    R: DiagnosticsRepository,
{
    pub fn new(diagnostics_repo: R) -> Self {
        Self { diagnostics_repo }
    }

    /// スキーマのテーブル名をリストして、テーブルごとにログに記録する。
    ///
    /// スキーマが存在しない場合と、スキーマにテーブルが存在しない場合は
    /// 区別せずに空のリストを返し、警告をログに記録する。
    pub async fn report_tables(&self, schema: &str) -> DomainResult<Vec<String>> {
        let tables = self.diagnostics_repo.table_names(schema).await?;
        if tables.is_empty() {
            tracing::warn!("No tables found in schema {}", schema);
        }
        for table in &tables {
            tracing::info!("Found table in schema {}: {}", schema, table);
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use domain::DomainError;

    use super::*;

    struct InMemoryDiagnosticsRepository {
        tables: Vec<String>,
        error: Option<Cow<'static, str>>,
    }

    #[async_trait::async_trait]
    impl DiagnosticsRepository for InMemoryDiagnosticsRepository {
        async fn table_names(&self, _schema: &str) -> DomainResult<Vec<String>> {
            match &self.error {
                Some(message) => Err(DomainError::Repository(message.clone())),
                None => Ok(self.tables.clone()),
            }
        }
    }

    #[tokio::test]
    async fn diagnostics_use_case_report_tables() {
        let use_case = DiagnosticsUseCase::new(InMemoryDiagnosticsRepository {
            tables: vec![String::from("todos")],
            error: None,
        });

        let tables = use_case.report_tables("public").await.unwrap();

        assert_eq!(tables, vec![String::from("todos")]);
    }

    /// スキーマにテーブルが存在しない場合は空のリストを返す。
    #[tokio::test]
    async fn diagnostics_use_case_report_tables_with_an_empty_schema() {
        let use_case = DiagnosticsUseCase::new(InMemoryDiagnosticsRepository {
            tables: vec![],
            error: None,
        });

        let tables = use_case.report_tables("missing_schema").await.unwrap();

        assert!(tables.is_empty());
    }

    /// リポジトリのエラーは呼び出し元に伝播する。
    #[tokio::test]
    async fn diagnostics_use_case_report_tables_with_a_repository_error() {
        let use_case = DiagnosticsUseCase::new(InMemoryDiagnosticsRepository {
            tables: vec![],
            error: Some("connection refused".into()),
        });

        let result = use_case.report_tables("public").await;

        assert!(matches!(result, Err(DomainError::Repository(_))));
    }
}
