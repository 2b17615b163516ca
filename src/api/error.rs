use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::{DataError, InputError};

/// Every failure a handler can return; the only place statuses are chosen.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Malformed request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("Malformed path parameter: {0}")]
    Path(#[from] PathRejection),
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::Data(DataError::Invalid(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Data(DataError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Data(DataError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Data(DataError::InvalidReference(_)) => StatusCode::BAD_REQUEST,
            ApiError::Data(DataError::Rejected(_)) => StatusCode::BAD_REQUEST,
            ApiError::Data(DataError::Invalid(_)) => StatusCode::BAD_REQUEST,
            ApiError::Data(DataError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(_) | ApiError::Path(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Data(DataError::NotFound { .. }) => "not_found",
            ApiError::Data(DataError::Conflict(_)) => "conflict",
            ApiError::Data(DataError::InvalidReference(_)) => "invalid_reference",
            ApiError::Data(DataError::Rejected(_)) => "rejected",
            ApiError::Data(DataError::Invalid(_)) => "invalid_input",
            ApiError::Data(DataError::Database(_)) => "database_error",
            ApiError::Body(_) | ApiError::Path(_) => "bad_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal details stay in the log.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
            self.to_string()
        };

        let body = Json(json!({
            "error": self.kind(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
