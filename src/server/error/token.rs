use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The identity provider refused to issue a token.
    #[error("Identity provider rejected the token request: {error} ({description})")]
    Rejected { error: String, description: String },
    #[error("Access token unavailable: {0}")]
    Unavailable(String),
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDto {
                error: "Identity provider unavailable".to_string(),
            }),
        )
            .into_response()
    }
}
