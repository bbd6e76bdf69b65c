//! Error types for the HTTP layer and the repositories.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Application-level errors, mapped onto HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Path id does not match payload id")]
    IdMismatch,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::CategoryNotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
                error: self.to_string(),
                code: "CATEGORY_NOT_FOUND",
            }),
            AppError::ProductNotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
                error: self.to_string(),
                code: "PRODUCT_NOT_FOUND",
            }),
            AppError::IdMismatch => HttpResponse::BadRequest().json(ErrorResponse {
                error: self.to_string(),
                code: "ID_MISMATCH",
            }),
            AppError::Database(_) => HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal server error".to_string(),
                code: "INTERNAL_ERROR",
            }),
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

/// Repository-level errors.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // Handlers turn NotFound into the typed 404 themselves; a bare
            // NotFound reaching this conversion is a query that should have
            // returned rows.
            RepositoryError::NotFound => AppError::Database(sqlx::Error::RowNotFound),
            RepositoryError::Query(e) => AppError::Database(e),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type RepoResult<T> = Result<T, RepositoryError>;
