use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::ApiResponse;
use crate::domain::fixture::FixtureValidationError;
use crate::domain::repositories::RepositoryError;

/// Message sent to clients for any data file failure
pub const DATA_FILE_ERROR: &str = "Could not read data file.";

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Maps a data store failure, replacing the client-facing message
    ///
    /// The underlying cause (including the file path) is logged, never sent.
    pub fn data_source(err: RepositoryError, message: impl Into<String>) -> Self {
        tracing::error!(error = %err, "Data source failure");

        if err.is_not_found() {
            Self::not_found(message)
        } else {
            Self::internal_server_error(message)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<Vec<()>>::error(self.message));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::data_source(err, DATA_FILE_ERROR)
    }
}

impl From<FixtureValidationError> for ApiError {
    fn from(err: FixtureValidationError) -> Self {
        tracing::error!(error = %err, "Fixture data failed validation");
        Self::internal_server_error("Match data is malformed.")
    }
}
