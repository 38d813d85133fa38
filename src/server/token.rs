//! Access tokens for the upstream identity provider.
//!
//! The server never fetches tokens on its own; it asks whatever [`AccessTokenProvider`]
//! was attached to the [`App`](crate::server::model::app::App). Production uses
//! [`StaticAccessToken`], tests attach a mock.

use serde::{Deserialize, Serialize};

use crate::server::error::{config::ConfigError, token::TokenError};

/// Environment variable read by [`StaticAccessToken::from_env`].
pub static ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";

/// OAuth2 access token body as returned by a token endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl AccessToken {
    /// Bearer token with the given value and lifetime in seconds.
    pub fn bearer(access_token: impl Into<String>, expires_in: u64) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
            expires_in,
            scope: None,
        }
    }

    /// Value for an `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

/// Source of access tokens for calls to the identity provider.
pub trait AccessTokenProvider: Send + Sync {
    fn access_token(&self) -> Result<AccessToken, TokenError>;
}

/// Provider handing out one fixed token.
#[derive(Debug, Clone)]
pub struct StaticAccessToken {
    token: AccessToken,
}

impl StaticAccessToken {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }

    /// Build a provider from the `ACCESS_TOKEN` environment variable.
    ///
    /// # Returns
    /// - `Ok(StaticAccessToken)` - The variable is set and non-empty
    /// - `Err(ConfigError::MissingEnvVar)` - The variable is unset or empty
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(ACCESS_TOKEN_ENV) {
            Ok(value) if !value.is_empty() => Ok(Self::new(AccessToken::bearer(value, 0))),
            _ => Err(ConfigError::MissingEnvVar(ACCESS_TOKEN_ENV.to_string())),
        }
    }
}

impl AccessTokenProvider for StaticAccessToken {
    fn access_token(&self) -> Result<AccessToken, TokenError> {
        Ok(self.token.clone())
    }
}
