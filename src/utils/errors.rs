//! Manejo de errores
//!
//! Todo fallo que reporta la API es un [`AppError`]; la variante decide
//! el status HTTP y el `code` del cuerpo JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::EntityKind;

/// Tipo de error de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already assigned: {0}")]
    AlreadyAssigned(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Cuerpo de toda respuesta de error.
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl ErrorResponse {
    fn new(error: &str, message: String, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message,
            details: None,
            code: code.to_string(),
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyAssigned(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Hash(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ErrorResponse::new(
                    "Database Error",
                    "An error occurred while accessing the database".to_string(),
                    "DB_ERROR",
                )
                .with_details(json!({ "sql_error": e.to_string() }))
            }

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                ErrorResponse::new(
                    "Validation Error",
                    "The provided data is invalid".to_string(),
                    "VALIDATION_ERROR",
                )
                .with_details(json!(e))
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                ErrorResponse::new("Not Found", msg, "NOT_FOUND")
            }

            AppError::AlreadyAssigned(msg) => {
                tracing::warn!("Already assigned: {}", msg);
                ErrorResponse::new("Already Assigned", msg, "ALREADY_ASSIGNED")
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                ErrorResponse::new("Bad Request", msg, "BAD_REQUEST")
            }

            AppError::Hash(msg) => {
                tracing::error!("Hash error: {}", msg);
                ErrorResponse::new(
                    "Hash Error",
                    "An error occurred while processing credentials".to_string(),
                    "HASH_ERROR",
                )
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new(
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                    "INTERNAL_ERROR",
                )
                .with_details(json!({ "internal_error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Alias de Result para servicios y repositorios
pub type AppResult<T> = Result<T, AppError>;

/// No existe el registro de `kind` con `id`.
pub fn not_found_error(kind: EntityKind, id: i64) -> AppError {
    AppError::NotFound(format!("Could not find {} with id: {}", kind, id))
}

/// `child` ya está vinculado a otro `parent`.
pub fn already_assigned_error(
    child: EntityKind,
    child_id: i64,
    parent: EntityKind,
    parent_id: i64,
) -> AppError {
    AppError::AlreadyAssigned(format!(
        "{} with id: {} is already assigned to {} with id: {}",
        child, child_id, parent, parent_id
    ))
}

pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
