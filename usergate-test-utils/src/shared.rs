//! Process-wide cache of the test configuration and fixtures.
//!
//! Both are loaded from disk on first use and shared by every [`TestContext`](crate::TestContext)
//! built with the default profile and directories.

use std::sync::{Arc, OnceLock};

use usergate::server::config::Config;

use crate::{
    constant::{default_config_dir, default_fixtures_dir, TEST_PROFILE},
    error::TestError,
    fixtures::Fixtures,
};

static CONFIG: OnceLock<Arc<Config>> = OnceLock::new();
static FIXTURES: OnceLock<Arc<Fixtures>> = OnceLock::new();

/// Configuration for the `test` profile.
///
/// # Returns
/// - `Ok(Arc<Config>)` - The same instance on every call within the process
/// - `Err(TestError::Config)` - The profile file is missing or malformed; nothing is cached
pub fn config() -> Result<Arc<Config>, TestError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config.clone());
    }

    let config = Arc::new(Config::load_from_dir(default_config_dir(), TEST_PROFILE)?);

    Ok(CONFIG.get_or_init(|| config).clone())
}

/// Fixture set from this crate's `mocks/` directory.
///
/// # Returns
/// - `Ok(Arc<Fixtures>)` - The same instance on every call within the process
/// - `Err(TestError::FixtureRead)` - A fixture file is missing; nothing is cached
pub fn fixtures() -> Result<Arc<Fixtures>, TestError> {
    if let Some(fixtures) = FIXTURES.get() {
        return Ok(fixtures.clone());
    }

    let fixtures = Arc::new(Fixtures::load(default_fixtures_dir())?);

    Ok(FIXTURES.get_or_init(|| fixtures).clone())
}
