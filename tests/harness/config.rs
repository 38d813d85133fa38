use std::sync::Arc;

use usergate::server::error::config::ConfigError;

use super::*;

/// Tests the process-wide configuration and fixture cache.
///
/// Verifies that two contexts built with the defaults share one configuration instance
/// and one fixture set.
///
/// Expected: two contexts share one configuration instance
#[tokio::test]
async fn config_is_loaded_once() -> Result<(), TestError> {
    let first = TestBuilder::new().build().await?;
    let second = TestBuilder::new().build().await?;

    assert!(Arc::ptr_eq(&first.config, &second.config));
    assert!(Arc::ptr_eq(&first.fixtures, &second.fixtures));
    assert_eq!(first.config.profile, "test");

    Ok(())
}

/// Tests isolation of mock servers between contexts.
///
/// Verifies that each context starts its own mock server and that its application
/// configuration points the identity provider at that server.
///
/// Expected: each context gets its own mock server and application config
#[tokio::test]
async fn contexts_do_not_share_mock_servers() -> Result<(), TestError> {
    let first = TestBuilder::new().build().await?;
    let second = TestBuilder::new().build().await?;

    assert_ne!(first.server_url(), second.server_url());
    assert_eq!(first.app.config().identity.base_url, first.server_url());
    assert_eq!(second.app.config().identity.base_url, second.server_url());
    assert_eq!(
        first.app.config().identity.token_url(),
        format!("{}/oauth/token", first.server_url())
    );

    Ok(())
}

/// Tests loading a profile other than `test`.
///
/// Verifies that the `development` profile is loaded fresh with its own values instead of
/// coming from the shared cache.
///
/// Expected: other profiles are loaded fresh
#[tokio::test]
async fn other_profile_is_not_shared() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let development = TestBuilder::new()
        .with_profile("development")
        .build()
        .await?;

    assert!(!Arc::ptr_eq(&test.config, &development.config));
    assert_eq!(development.config.profile, "development");
    assert_eq!(development.config.server.port, 8080);

    Ok(())
}

/// Tests rejection of profile names containing path components.
///
/// Verifies that a profile cannot resolve to a file outside the config directory.
///
/// Expected: a profile that would leave the config directory is rejected
#[tokio::test]
async fn build_fails_on_invalid_profile() {
    let result = TestBuilder::new().with_profile("../test").build().await;

    assert!(matches!(
        result,
        Err(TestError::Config(ConfigError::InvalidProfile(_)))
    ));
}

/// Tests a profile file that is not a valid configuration document.
///
/// Verifies that the parse failure is returned from `build()` rather than ignored.
///
/// Expected: a malformed profile file fails the build
#[tokio::test]
async fn build_fails_on_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("test.yaml"), "server: [not, a, map]\n").unwrap();

    let result = TestBuilder::new().with_config_dir(dir.path()).build().await;

    assert!(matches!(
        result,
        Err(TestError::Config(ConfigError::Parse { .. }))
    ));
}
