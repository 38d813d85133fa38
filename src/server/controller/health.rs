use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::Error, model::app::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Report whether the server is configured and holds a usable access token
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is ready to call the identity provider", body = HealthDto),
        (status = 503, description = "No access token could be obtained", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let token = state.access_token.access_token()?;

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            profile: state.config.profile.clone(),
            token_type: token.token_type,
        }),
    ))
}
