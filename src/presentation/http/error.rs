use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::MissingParameter(_) => {
                Self::new(StatusCode::BAD_REQUEST, "MissingParameter", message)
            }
            ApplicationError::InvalidParameter(_) => {
                Self::new(StatusCode::BAD_REQUEST, "InvalidParameter", message)
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(&domain_err, message),
        }
    }

    fn from_domain(err: &DomainError, message: String) -> Self {
        match err {
            DomainError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, "Validation", message),
            DomainError::Conflict(_) => Self::new(StatusCode::CONFLICT, "Conflict", message),
            DomainError::SlugSpaceExhausted { .. } => {
                Self::new(StatusCode::CONFLICT, "SlugSpaceExhausted", message)
            }
            DomainError::Unavailable(_) => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Unavailable", message)
            }
            DomainError::Persistence(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Persistence", message)
            }
        }
    }

    fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, kind = self.kind, message = %self.message, "request failed");
        }
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            kind: self.kind.to_string(),
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Canonical HTTP reason phrase.
    pub error: String,
    pub message: String,
    /// Machine-readable error kind, e.g. `MissingParameter`.
    pub kind: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
