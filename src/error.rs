use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum WorkTimeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{0} was not found")]
    NotFound(String),

    #[error("database error")]
    Database(#[source] sqlx::Error),
}

impl From<StoreError> for WorkTimeError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::MissingReference => WorkTimeError::InvalidArgument(
                "task_id or employee_id does not reference an existing record".to_string(),
            ),
            StoreError::Database(e) => WorkTimeError::Database(e),
        }
    }
}

impl From<ValidationErrors> for WorkTimeError {
    fn from(value: ValidationErrors) -> Self {
        WorkTimeError::Validation(value)
    }
}

impl ResponseError for WorkTimeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(errors) => json!({
                "message": "Validation failed",
                "errors": errors
            }),
            Self::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                json!({ "message": "Internal Server Error" })
            }
            other => json!({ "message": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            WorkTimeError::InvalidArgument("entry".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WorkTimeError::Validation(ValidationErrors::default()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WorkTimeError::NotFound("work time entry 3".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WorkTimeError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_reference_becomes_invalid_argument() {
        let error: WorkTimeError = StoreError::MissingReference.into();

        assert!(matches!(error, WorkTimeError::InvalidArgument(_)));
    }
}
