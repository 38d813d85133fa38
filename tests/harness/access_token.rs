use std::sync::Arc;

use usergate::server::token::AccessToken;

use super::*;

/// Tests injection of the access token mock into the application handle.
///
/// Verifies that the handle's access token slot points at the very mock exposed by the
/// context, so calls made by the application are counted on it.
///
/// Expected: the application's access token slot holds the context's mock
#[tokio::test]
async fn app_holds_context_mock() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    assert!(test.access_token_injected());

    let mock = test.access_token.clone().unwrap();
    let provider = test.app.access_token().unwrap();
    assert!(std::ptr::addr_eq(Arc::as_ptr(&mock), Arc::as_ptr(provider)));

    // Calls through the application are visible on the mock
    provider.access_token().unwrap();
    assert_eq!(mock.calls(), 1);

    Ok(())
}

/// Tests replacing the default access token mock.
///
/// Verifies that a mock passed to the builder is the one handler state hands out.
///
/// Expected: a custom mock replaces the default token
#[tokio::test]
async fn custom_mock_is_injected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_access_token(AccessTokenMock::with_token(AccessToken::bearer(
            "custom", 60,
        )))
        .build()
        .await?;

    let state = test.into_app_state()?;
    let token = state.access_token.access_token().unwrap();
    assert_eq!(token.access_token, "custom");
    assert_eq!(token.authorization_header(), "Bearer custom");

    Ok(())
}

/// Tests a context built without an access token.
///
/// Verifies that the slot stays empty and handler state cannot be built from it.
///
/// Expected: without an access token the handler state cannot be built
#[tokio::test]
async fn state_unavailable_without_access_token() -> Result<(), TestError> {
    let test = TestBuilder::new().without_access_token().build().await?;

    assert!(!test.access_token_injected());
    assert!(matches!(test.into_app_state(), Err(TestError::App(_))));

    Ok(())
}
