use super::*;

/// Tests fixture-backed mock endpoints registered through the builder.
///
/// Verifies that the endpoint answers with the fixture text byte for byte and that the
/// expected call count is met.
///
/// Expected: a fixture endpoint answers with the fixture text verbatim
#[tokio::test]
async fn fixture_endpoint_serves_fixture_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fixture_endpoint(
            "GET",
            "/api/v2/users/1",
            200,
            Fixture::SingleUserResponse,
            1,
        )
        .build()
        .await?;

    let resp = reqwest::get(format!(
        "{}/api/v2/users/1",
        test.server_url()
    ))
    .await
    .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(
        resp.text().await.unwrap(),
        test.fixture(Fixture::SingleUserResponse)
    );

    test.assert_mocks();

    Ok(())
}

/// Tests the error endpoint helpers.
///
/// Verifies that the generic error helper answers with `error_response` and the token
/// error helper answers the token URL with `access_token_error` and a 401.
///
/// Expected: error and token error helpers answer with their fixtures
#[tokio::test]
async fn error_endpoints_serve_error_fixtures() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let client = reqwest::Client::new();

    let not_found = test
        .responses()
        .create_error_endpoint("GET", "/api/v2/users/missing", 404, 1);
    let token_error = test.responses().create_token_error_endpoint("/oauth/token", 1);

    let resp = client
        .get(format!("{}/api/v2/users/missing", test.server_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, test.fixtures.json(Fixture::ErrorResponse)?);

    let resp = client
        .post(test.app.config().identity.token_url())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.text().await.unwrap(),
        test.fixture(Fixture::AccessTokenError)
    );

    not_found.assert();
    token_error.assert();

    Ok(())
}

/// Tests custom mock endpoints next to fixture endpoints.
///
/// Verifies that endpoints created through a closure and through a fixture are both
/// registered on the same server and checked by `assert_mocks`.
///
/// Expected: custom endpoints are registered alongside fixture endpoints
#[tokio::test]
async fn custom_endpoint_is_registered() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("PATCH", "/api/v2/users/1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"user_id":"1"}"#)
                .expect(1)
                .create()
        })
        .with_fixture_endpoint("POST", "/api/v2/users", 201, Fixture::CreateUserResponse, 1)
        .build()
        .await?;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{}/api/v2/users/1", test.server_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let resp = client
        .post(format!("{}/api/v2/users", test.server_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let created: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(created["email"], "new.user@example.com");

    test.assert_mocks();

    Ok(())
}
