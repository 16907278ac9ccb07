use std::{error::Error as StdError, fmt};

use axum::{
    extract::rejection::FormRejection,
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::{HookError, InteractError, PoolError};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// The only message clients ever see for a failure in the persistence layer.
/// The real cause is logged
pub const STORE_FAILURE_MESSAGE: &str = "Server error";

/// Used as the inner error type for endpoints that have no errors of their own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl StdError for Nothing {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub error_messages: Vec<String>,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            error_messages: vec![message.into()],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_messages.join("; "))
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ServerError<T> {
    /// An error specific to the endpoint, see [`crate::api::response_errors`]
    Inner { code: StatusCode, inner: T },
    Validation { inner: ValidationError },
    StoreFailure { message: String },
}

#[macro_export]
macro_rules! store_failure {
    ($($arg:tt)*) => {
        $crate::api::error::ServerError::StoreFailure { message: format!($($arg)*) }
    };
}

impl<T> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self {
            Self::Inner { code, .. } => *code,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::StoreFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: fmt::Display> ServerError<T> {
    /// The message put in the response body
    pub fn public_message(&self) -> String {
        match self {
            Self::Inner { inner, .. } => inner.to_string(),
            Self::Validation { inner } => inner.to_string(),
            Self::StoreFailure { .. } => STORE_FAILURE_MESSAGE.to_owned(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner { code, inner } => write!(f, "{code}: {inner}"),
            Self::Validation { inner } => write!(f, "Validation failed: {inner}"),
            Self::StoreFailure { message } => write!(f, "Store failure: {message}"),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> StdError for ServerError<T> {}

impl<T: fmt::Display> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        let code = self.code();
        if code.is_server_error() {
            error!(%self, "Request failed");
        } else {
            warn!(%self, "Request rejected");
        }

        (
            code,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

impl<T> From<ValidationError> for ServerError<T> {
    fn from(inner: ValidationError) -> Self {
        Self::Validation { inner }
    }
}

impl<T> From<FormRejection> for ServerError<T> {
    fn from(rejection: FormRejection) -> Self {
        Self::Validation {
            inner: ValidationError::new(rejection.body_text()),
        }
    }
}

impl<T> From<rusqlite::Error> for ServerError<T> {
    fn from(err: rusqlite::Error) -> Self {
        store_failure!("rusqlite: {err}")
    }
}

impl<T> From<PoolError> for ServerError<T> {
    fn from(err: PoolError) -> Self {
        store_failure!("Pool::get: {err}")
    }
}

impl<T> From<InteractError> for ServerError<T> {
    fn from(err: InteractError) -> Self {
        store_failure!("Object::interact: {err}")
    }
}

impl<T: fmt::Display> From<ServerError<T>> for HookError {
    fn from(err: ServerError<T>) -> Self {
        Self::Message(err.to_string())
    }
}
