use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response of the health endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    /// Always `"ok"` when the endpoint answers 200
    pub status: String,
    /// Configuration profile the server was started with
    pub profile: String,
    /// Type of the access token the server currently holds
    pub token_type: String,
}
