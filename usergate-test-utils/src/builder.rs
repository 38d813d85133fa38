//! Declarative test builder.
//!
//! Configuration methods are chained and only take effect in the final `build()` call,
//! which loads the configuration and fixtures, starts the mock server, injects the access
//! token mock and registers the mock endpoints.

use std::{path::PathBuf, sync::Arc};

use mockito::Mock;
use usergate::server::config::Config;

use crate::{
    constant::{default_config_dir, TEST_PROFILE},
    error::TestError,
    fixtures::{token::AccessTokenMock, Fixture, Fixtures},
    shared, TestContext,
};

/// Which access token mock `build()` attaches to the application.
enum AccessTokenSetup {
    Default,
    Mock(AccessTokenMock),
    ErrorFixture,
    None,
}

/// Builder for declarative test initialization.
pub struct TestBuilder {
    profile: String,
    config_dir: Option<PathBuf>,
    fixtures_dir: Option<PathBuf>,
    access_token: AccessTokenSetup,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    fixture_endpoints: Vec<(String, String, usize, Fixture, usize)>, // (method, path, status, fixture, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes a builder for the `test` profile with the shared configuration and
    /// fixtures, the default access token mock and no mock endpoints.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            profile: TEST_PROFILE.to_string(),
            config_dir: None,
            fixtures_dir: None,
            access_token: AccessTokenSetup::Default,
            mock_builders: Vec::new(),
            fixture_endpoints: Vec::new(),
        }
    }

    /// Load another configuration profile instead of `test`.
    ///
    /// Profiles other than `test` are loaded fresh and not shared between contexts.
    ///
    /// # Arguments
    /// - `profile` - Profile name, resolved to `<config dir>/<profile>.yaml`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Read profile files from `dir` instead of the workspace `config/` directory.
    ///
    /// The configuration is loaded fresh, even for the `test` profile.
    ///
    /// # Arguments
    /// - `dir` - Directory holding `<profile>.yaml` files
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Read fixture files from `dir` instead of this crate's `mocks/` directory.
    ///
    /// Every fixture must be present in `dir`, otherwise `build()` fails.
    ///
    /// # Arguments
    /// - `dir` - Directory holding the fixture JSON files
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = Some(dir.into());
        self
    }

    /// Attach `mock` to the application instead of the default mock.
    ///
    /// # Arguments
    /// - `mock` - Access token mock to inject; reachable afterwards as `TestContext::access_token`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_access_token(mut self, mock: AccessTokenMock) -> Self {
        self.access_token = AccessTokenSetup::Mock(mock);
        self
    }

    /// Attach a mock that rejects every token request.
    ///
    /// The rejection carries the `error` and `error_description` of the
    /// `access_token_error` fixture, so handlers see the same failure the identity
    /// provider would report.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_failing_access_token(mut self) -> Self {
        self.access_token = AccessTokenSetup::ErrorFixture;
        self
    }

    /// Leave the application's access token slot empty.
    ///
    /// `TestContext::into_app_state` fails for contexts built this way.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn without_access_token(mut self) -> Self {
        self.access_token = AccessTokenSetup::None;
        self
    }

    /// Add a mock endpoint answering with a fixture body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path to match
    /// - `status` - Status code of the response
    /// - `fixture` - Fixture used as the JSON body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_fixture_endpoint(
        mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        status: usize,
        fixture: Fixture,
        expected_requests: usize,
    ) -> Self {
        self.fixture_endpoints.push((
            method.into(),
            path.into(),
            status,
            fixture,
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Provides direct access to the mockito server for endpoints that do not answer with
    /// a fixture body.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Installs the test tracing subscriber, then executes the queued setup in order:
    /// 1. Loads the configuration (shared for the default `test` profile)
    /// 2. Loads the fixtures (shared for the default directory)
    /// 3. Starts the mock server and creates the application handle
    /// 4. Injects the access token mock
    /// 5. Creates mock endpoints, custom ones first
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::Config)` - The profile is invalid, missing or malformed
    /// - `Err(TestError::FixtureRead)` - A fixture file is missing or unreadable
    /// - `Err(TestError::FixtureJson)` - The `access_token_error` fixture is malformed
    pub async fn build(self) -> Result<TestContext, TestError> {
        crate::init_tracing();

        // 1. Configuration
        let config = match (&self.config_dir, self.profile == TEST_PROFILE) {
            (None, true) => shared::config()?,
            (dir, _) => {
                let dir = dir.clone().unwrap_or_else(default_config_dir);
                Arc::new(Config::load_from_dir(dir, &self.profile)?)
            }
        };

        // 2. Fixtures
        let fixtures = match self.fixtures_dir {
            None => shared::fixtures()?,
            Some(dir) => Arc::new(Fixtures::load(dir)?),
        };

        // 3. Mock server and application handle
        let mut setup = TestContext::new(config, fixtures).await;

        // 4. Access token
        let access_token = match self.access_token {
            AccessTokenSetup::Default => Some(AccessTokenMock::new()),
            AccessTokenSetup::Mock(mock) => Some(mock),
            AccessTokenSetup::ErrorFixture => {
                Some(AccessTokenMock::from_error_fixture(&setup.fixtures)?)
            }
            AccessTokenSetup::None => None,
        };

        if let Some(mock) = access_token {
            setup.inject_access_token(Arc::new(mock));
        }

        // 5. Mock endpoints
        // Custom endpoints are created first so tests can stack mocks for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (method, path, status, fixture, expected) in self.fixture_endpoints {
            mocks.push(setup.responses().create_fixture_endpoint(
                &method, &path, status, fixture, expected,
            ));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        tracing::debug!(
            profile = %setup.config.profile,
            server = %setup.server_url(),
            "Built test context"
        );

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
