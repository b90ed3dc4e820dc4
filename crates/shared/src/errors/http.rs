use crate::errors::{error::ApiError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("No se puede encontrar el producto con la ID: {0}")]
    ProductoNotFound(i64),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ProductoNotFound(id) => HttpError::ProductoNotFound(id),
            ServiceError::NotFound => HttpError::NotFound,
            ServiceError::Repo(repo_err) => {
                error!("❌ Repository failure: {repo_err}");
                HttpError::Internal("Error interno del servidor".into())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::NotFound => StatusCode::NOT_FOUND.into_response(),
            HttpError::ProductoNotFound(_) => {
                let status = StatusCode::NOT_FOUND;
                (status, Json(ApiError::new(status, self.to_string()))).into_response()
            }
            HttpError::Internal(msg) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, Json(ApiError::new(status, msg))).into_response()
            }
        }
    }
}
