//! Mapping of registry outcomes onto HTTP responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::ErrorResponse;
use crate::error::RegistryError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Handler error; every variant renders as `{"error": "..."}`
#[derive(Debug)]
pub struct ApiError(RegistryError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError(RegistryError::MalformedInput(message.into()))
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            RegistryError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            RegistryError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            RegistryError::MalformedInput(msg) => (StatusCode::BAD_REQUEST, msg),
            err @ RegistryError::MalformedRow { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
            RegistryError::Storage(err) => {
                // Detail stays in the log
                log::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (RegistryError::code_not_found("X"), StatusCode::NOT_FOUND),
            (RegistryError::Conflict("dup".into()), StatusCode::CONFLICT),
            (ApiError::bad_request("bad").0, StatusCode::BAD_REQUEST),
            (
                RegistryError::MalformedRow {
                    expected: 7,
                    actual: 1,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                RegistryError::Storage(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
