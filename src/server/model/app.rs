use std::sync::Arc;

use axum::Router;

use crate::server::{config::Config, error::Error, router, token::AccessTokenProvider};

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub access_token: Arc<dyn AccessTokenProvider>,
}

/// Handle to the application before it is served.
///
/// Owns the loaded configuration and the `access_token` slot. The slot starts empty and
/// must be filled with [`App::set_access_token`] before [`App::state`] or
/// [`App::router`] can be used.
#[derive(Clone)]
pub struct App {
    config: Arc<Config>,
    access_token: Option<Arc<dyn AccessTokenProvider>>,
}

impl App {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            access_token: None,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Attach the access token provider, replacing any previous one.
    pub fn set_access_token(&mut self, provider: Arc<dyn AccessTokenProvider>) {
        if self.access_token.is_some() {
            tracing::debug!("Replacing access token provider");
        }

        self.access_token = Some(provider);
    }

    pub fn access_token(&self) -> Option<&Arc<dyn AccessTokenProvider>> {
        self.access_token.as_ref()
    }

    /// Build the handler state.
    ///
    /// # Returns
    /// - `Ok(AppState)` - Configuration and provider ready for handlers
    /// - `Err(Error::AccessTokenNotSet)` - No provider has been attached yet
    pub fn state(&self) -> Result<AppState, Error> {
        let access_token = self.access_token.clone().ok_or(Error::AccessTokenNotSet)?;

        Ok(AppState {
            config: self.config.clone(),
            access_token,
        })
    }

    /// Build the HTTP router with state attached.
    pub fn router(&self) -> Result<Router, Error> {
        Ok(router::routes().with_state(self.state()?))
    }
}
