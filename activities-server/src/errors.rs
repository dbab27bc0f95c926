use std::fmt::{Display, Formatter};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use activities_core::{ErrorDetail, SeedError, SignupError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Signup(#[from] SignupError),

    #[error("{0}")]
    ApiError(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    Unprocessable(String),
}

impl ApiError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable(message.into())
    }

    pub fn missing_query(param: &str) -> Self {
        Self::unprocessable(format!("Missing required query parameter: {}", param))
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unprocessable(message) => write!(f, "Status=422, Unprocessable: {}", message),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Signup(e) if e.is_conflict() => StatusCode::BAD_REQUEST,
            ServerError::Signup(_) => StatusCode::NOT_FOUND,
            ServerError::ApiError(ApiError::Unprocessable(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ServerError::Signup(e) => {
                warn!(activity = %e.activity(), "{}", e);
                e.to_string()
            }
            ServerError::ApiError(e) => {
                warn!("{}", e);
                match e {
                    ApiError::Unprocessable(message) => message,
                }
            }
            e => {
                error!(%e, "Unhandled server error");
                "Unexpected Error".to_string()
            }
        };

        (status, axum::Json(ErrorDetail { detail })).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
