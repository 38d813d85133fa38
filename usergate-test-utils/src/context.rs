//! Test context structure and utilities.
//!
//! The `TestContext` returned by [`TestBuilder`](crate::TestBuilder) holds the test
//! configuration, the application handle with its access token mock, the loaded fixtures
//! and the mock HTTP server standing in for the identity provider.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use usergate::server::{
    config::Config,
    model::app::{App, AppState},
};

use crate::{
    error::TestError,
    fixtures::{token::AccessTokenMock, Fixture, Fixtures},
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().build().await?;
///
/// // Verbatim fixture text
/// let body = test.fixture(Fixture::SingleUserResponse);
///
/// // Mock identity provider endpoint
/// test.responses()
///     .create_fixture_endpoint("GET", "/api/v2/users/1", 200, Fixture::SingleUserResponse, 1);
///
/// // Handler state with the access token mock attached
/// let state = test.into_app_state()?;
/// ```
pub struct TestContext {
    /// Configuration of the selected profile (`test` unless overridden) as loaded from disk
    pub config: Arc<Config>,
    /// Application handle, its identity provider pointed at the mock server
    pub app: App,
    /// Access token mock attached to `app`, if any
    pub access_token: Option<Arc<AccessTokenMock>>,
    /// Loaded fixture bodies
    pub fixtures: Arc<Fixtures>,

    /// Mock HTTP server for identity provider endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a test context around a fresh mock server.
    ///
    /// The application receives a copy of `config` whose identity base URL is the mock
    /// server's URL; `config` itself is kept untouched.
    pub(crate) async fn new(config: Arc<Config>, fixtures: Arc<Fixtures>) -> Self {
        let server = Server::new_async().await;
        let app_config = config.with_identity_base_url(server.url());

        TestContext {
            config,
            app: App::new(Arc::new(app_config)),
            access_token: None,
            fixtures,
            server,
            mocks: Vec::new(),
        }
    }

    /// Attach `mock` to the application and keep a handle to it.
    pub(crate) fn inject_access_token(&mut self, mock: Arc<AccessTokenMock>) {
        self.app.set_access_token(mock.clone());
        self.access_token = Some(mock);
    }

    /// Base URL of the mock HTTP server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Verbatim text of `fixture`.
    pub fn fixture(&self, fixture: Fixture) -> &str {
        self.fixtures.get(fixture)
    }

    /// Whether the application's access token slot holds this context's mock.
    pub fn access_token_injected(&self) -> bool {
        match (&self.access_token, self.app.access_token()) {
            (Some(mock), Some(provider)) => {
                std::ptr::addr_eq(Arc::as_ptr(mock), Arc::as_ptr(provider))
            }
            _ => false,
        }
    }

    /// Handler state built from the application handle.
    ///
    /// # Returns
    /// - `Ok(AppState)` - State with the access token mock attached
    /// - `Err(TestError::App)` - The context was built without an access token
    pub fn into_app_state(&self) -> Result<AppState, TestError> {
        Ok(self.app.state()?)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
