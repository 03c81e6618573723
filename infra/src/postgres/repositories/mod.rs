mod diagnostics;

pub use diagnostics::*;

use domain::DomainError;

/// リポジトリエラーを生成する。
pub fn repository_error<E: std::error::Error>(e: E) -> DomainError {
    DomainError::Repository(e.to_string().into())
}
