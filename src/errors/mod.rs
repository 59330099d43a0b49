use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
    DatabaseError { error: String, details: String },
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl AppError {
    /// Wraps a driver failure under a user-facing summary, keeping the driver
    /// message as `details`.
    pub fn database(error: &str, err: sqlx::Error) -> Self {
        log::error!("{}: {}", error, err);
        AppError::DatabaseError {
            error: error.to_string(),
            details: err.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError { error, details } => {
                write!(f, "Database Error: {} ({})", error, details)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::DatabaseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg) => ErrorResponse {
                error: msg.as_str(),
                details: None,
            },
            AppError::DatabaseError { error, details } => ErrorResponse {
                error: error.as_str(),
                details: Some(details.as_str()),
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
