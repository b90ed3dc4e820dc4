use axum::http::StatusCode;
use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Layout of [`ApiError::fecha`], e.g. `19/10/2026 14:03:55`.
pub const FECHA_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Structured body returned when a lookup by id fails.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    #[schema(example = "NOT_FOUND")]
    pub estado: String,
    #[schema(example = "19/10/2026 14:03:55")]
    pub fecha: String,
    pub mensaje: String,
}

impl ApiError {
    pub fn new(status: StatusCode, mensaje: impl Into<String>) -> Self {
        Self {
            estado: status_name(status),
            fecha: Local::now().format(FECHA_FORMAT).to_string(),
            mensaje: mensaje.into(),
        }
    }
}

/// Upper snake case name of a status code: `404` becomes `NOT_FOUND`.
pub fn status_name(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_uppercase().replace([' ', '-'], "_"),
        None => status.as_u16().to_string(),
    }
}
