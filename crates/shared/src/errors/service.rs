use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("No se puede encontrar el producto con la ID: {0}")]
    ProductoNotFound(i64),

    /// Absence reported as a bare 404, without an error body.
    #[error("Not found")]
    NotFound,
}
