use super::*;

/// Tests the content of every loaded fixture.
///
/// Verifies that no fixture is blank and that each one parses as JSON.
///
/// Expected: every fixture is non-empty and parses as JSON
#[tokio::test]
async fn every_fixture_is_non_empty_json() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    for fixture in Fixture::ALL {
        let body = test.fixture(fixture);
        assert!(!body.trim().is_empty(), "{} is empty", fixture);
        test.fixtures.json(fixture)?;
    }

    Ok(())
}

/// Tests lookup of fixtures by their exposed keys.
///
/// Verifies that all seven keys resolve and that parsed fixtures carry the expected data.
///
/// Expected: fixtures are reachable by their exposed keys
#[tokio::test]
async fn fixtures_exposed_under_known_keys() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let keys = [
        "user_response",
        "error_response",
        "access_token_error",
        "single_user_response",
        "search_user_response",
        "create_user_response",
        "update_user_response",
    ];

    for key in keys {
        assert!(test.fixtures.by_name(key).is_some(), "missing {}", key);
    }

    let user = test.fixtures.json(Fixture::SingleUserResponse)?;
    assert_eq!(user["email"], "jane.doe@example.com");

    let search = test.fixtures.json(Fixture::SearchUserResponse)?;
    assert_eq!(search["users"].as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Tests building from a fixtures directory with one file missing.
///
/// Verifies that loading stops with an error naming the missing fixture instead of
/// yielding an empty body for it.
///
/// Expected: building with a fixtures directory missing one file fails
#[tokio::test]
async fn build_fails_when_fixture_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let source = usergate_test_utils::constant::default_fixtures_dir();

    for fixture in Fixture::ALL {
        if fixture == Fixture::CreateUserResponse {
            continue;
        }
        std::fs::copy(
            source.join(fixture.file_name()),
            dir.path().join(fixture.file_name()),
        )
        .unwrap();
    }

    let result = TestBuilder::new().with_fixtures_dir(dir.path()).build().await;

    match result {
        Err(TestError::FixtureRead { fixture, .. }) => {
            assert_eq!(fixture, Fixture::CreateUserResponse)
        }
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("build succeeded without createUserResponse.json"),
    }
}
