//! Error types for the usergate server.
//!
//! Domain errors (configuration, access tokens) are defined in submodules with `thiserror`
//! and aggregated into [`Error`]. Every error implements `IntoResponse` so handlers can
//! return `Result<_, Error>` directly.

pub mod config;
pub mod token;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, token::TokenError},
};

/// Main error type for the usergate server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing environment variable, unreadable or invalid profile).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Access token could not be obtained.
    #[error(transparent)]
    TokenError(#[from] TokenError),
    /// The server handle was used before an access token provider was attached.
    #[error("No access token provider has been set on the application")]
    AccessTokenNotSet,
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::TokenError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The error is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
