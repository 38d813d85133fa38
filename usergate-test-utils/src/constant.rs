//! Test configuration constants.
//!
//! These values are placeholders for tests, not real credentials.

use std::path::{Path, PathBuf};

use usergate::server::config::DEFAULT_CONFIG_DIR;

/// Configuration profile loaded by the harness.
pub static TEST_PROFILE: &str = "test";

/// Access token handed out by the default [`AccessTokenMock`](crate::AccessTokenMock).
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";

/// Lifetime in seconds of the default mock access token.
pub const TEST_ACCESS_TOKEN_EXPIRES_IN: u64 = 86400;

/// Directory of the fixture JSON files shipped with this crate.
pub static FIXTURES_DIR: &str = "mocks";

/// Workspace `config/` directory holding the profile files.
pub fn default_config_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(DEFAULT_CONFIG_DIR)
}

/// This crate's `mocks/` directory.
pub fn default_fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURES_DIR)
}
