//! Access token provider mock.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;
use usergate::server::{
    error::token::TokenError,
    token::{AccessToken, AccessTokenProvider},
};

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_ACCESS_TOKEN_EXPIRES_IN},
    error::TestError,
    fixtures::{Fixture, Fixtures},
};

/// OAuth2 error body as stored in the `access_token_error` fixture.
#[derive(Deserialize)]
struct TokenErrorBody {
    error: String,
    #[serde(default)]
    error_description: String,
}

/// Access token provider returning a preset outcome and counting how often it is asked.
#[derive(Debug)]
pub struct AccessTokenMock {
    outcome: Result<AccessToken, TokenError>,
    calls: AtomicUsize,
}

impl AccessTokenMock {
    /// Mock handing out [`TEST_ACCESS_TOKEN`] as a bearer token.
    pub fn new() -> Self {
        Self::with_token(AccessToken::bearer(
            TEST_ACCESS_TOKEN,
            TEST_ACCESS_TOKEN_EXPIRES_IN,
        ))
    }

    pub fn with_token(token: AccessToken) -> Self {
        Self {
            outcome: Ok(token),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: TokenError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock failing with the rejection described by the `access_token_error` fixture.
    ///
    /// # Returns
    /// - `Ok(AccessTokenMock)` - Mock returning `TokenError::Rejected`
    /// - `Err(TestError::FixtureJson)` - The fixture is not an OAuth2 error body
    pub fn from_error_fixture(fixtures: &Fixtures) -> Result<Self, TestError> {
        let fixture = Fixture::AccessTokenError;
        let body: TokenErrorBody = serde_json::from_str(fixtures.get(fixture))
            .map_err(|source| TestError::FixtureJson { fixture, source })?;

        Ok(Self::failing(TokenError::Rejected {
            error: body.error,
            description: body.error_description,
        }))
    }

    /// Number of times the application asked for a token.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for AccessTokenMock {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessTokenProvider for AccessTokenMock {
    fn access_token(&self) -> Result<AccessToken, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
