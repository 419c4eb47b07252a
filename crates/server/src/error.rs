use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pizzeria_core::errors::{ApplicationError, DomainError, InterfaceError};
use pizzeria_db::RepositoryError;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    TypeMismatch(String),
    #[error(transparent)]
    Unavailable(InterfaceError),
}

impl ApiError {
    /// Converts a store failure, tagging it with the id of the request it broke.
    pub fn from_repository(error: RepositoryError, correlation_id: impl Into<String>) -> Self {
        ApplicationError::from(error).into_interface(correlation_id).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::TypeMismatch(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::TypeMismatch(rejection.body_text())
    }
}

impl From<InterfaceError> for ApiError {
    fn from(value: InterfaceError) -> Self {
        match value {
            InterfaceError::BadRequest { message, .. } => Self::InvalidArgument(message),
            unavailable @ InterfaceError::ServiceUnavailable { .. } => {
                Self::Unavailable(unavailable)
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        ApplicationError::from(value).into()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(value: ApplicationError) -> Self {
        InterfaceError::from(value).into()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(value: RepositoryError) -> Self {
        ApplicationError::from(value).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidArgument(detail) | Self::TypeMismatch(detail) => {
                (StatusCode::BAD_REQUEST, format!("Invalid request: {detail}")).into_response()
            }
            Self::Unavailable(error) => {
                warn!(
                    event_name = "api.request.unavailable",
                    correlation_id = %error.correlation_id(),
                    error = %error,
                    "request failed on an unavailable store"
                );
                (StatusCode::SERVICE_UNAVAILABLE, error.user_message()).into_response()
            }
        }
    }
}
