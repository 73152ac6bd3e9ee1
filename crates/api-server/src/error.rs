use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use tracing::{debug, error};

use crate::dto::ErrorResponse;

/// Handler error. Every variant renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// An extractor refused the request: unparsable path segment or body.
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err {
                DomainError::ValidationError(_) => StatusCode::BAD_REQUEST,
                DomainError::UsernameAlreadyExists(_)
                | DomainError::EmailAlreadyExists(_)
                | DomainError::Conflict(_) => StatusCode::CONFLICT,
                DomainError::UserNotFound(_)
                | DomainError::MovieNotFound(_)
                | DomainError::PostNotFound(_)
                | DomainError::MetadataNotFound(_) => StatusCode::NOT_FOUND,
                DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                DomainError::MetadataError(_) => StatusCode::BAD_GATEWAY,
                DomainError::RepositoryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Domain(err) => err.to_string(),
            ApiError::Rejected { message, .. } => message,
        };

        if status.is_server_error() {
            error!("❌ {} {}", status, message);
        } else {
            debug!("Request rejected with {}: {}", status, message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::required("email"), StatusCode::BAD_REQUEST),
            (
                DomainError::UsernameAlreadyExists("ana".into()),
                StatusCode::CONFLICT,
            ),
            (DomainError::Conflict("UNIQUE".into()), StatusCode::CONFLICT),
            (DomainError::MovieNotFound(1), StatusCode::NOT_FOUND),
            (DomainError::MetadataNotFound(1), StatusCode::NOT_FOUND),
            (DomainError::PostNotFound(1), StatusCode::NOT_FOUND),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DomainError::MetadataError("timeout".into()), StatusCode::BAD_GATEWAY),
            (
                DomainError::RepositoryError("disk I/O error".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
