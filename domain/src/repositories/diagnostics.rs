use crate::DomainResult;

/// スキーマ診断リポジトリ
///
/// 起動時検証で使用するメタデータ問い合わせを抽象化する。
#[async_trait::async_trait]
pub trait DiagnosticsRepository {
    /// 指定したスキーマに存在するテーブルの名前をリストする。
    async fn table_names(&self, schema: &str) -> DomainResult<Vec<String>>;
}
