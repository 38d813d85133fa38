//! Fixture files loaded from disk.
//!
//! Every fixture is read eagerly and kept verbatim. Nothing is parsed on load; callers
//! that need structure use [`Fixtures::json`].

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use crate::error::TestError;

/// Known fixture names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixture {
    /// User list
    UserResponse,
    /// Error body returned by the identity provider for a failed request
    ErrorResponse,
    /// Error body returned by the token endpoint
    AccessTokenError,
    /// Single user
    SingleUserResponse,
    /// User search result page
    SearchUserResponse,
    /// User returned after creation
    CreateUserResponse,
    /// User returned after an update
    UpdateUserResponse,
}

impl Fixture {
    pub const ALL: [Fixture; 7] = [
        Fixture::UserResponse,
        Fixture::ErrorResponse,
        Fixture::AccessTokenError,
        Fixture::SingleUserResponse,
        Fixture::SearchUserResponse,
        Fixture::CreateUserResponse,
        Fixture::UpdateUserResponse,
    ];

    /// Key the fixture is exposed under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserResponse => "user_response",
            Self::ErrorResponse => "error_response",
            Self::AccessTokenError => "access_token_error",
            Self::SingleUserResponse => "single_user_response",
            Self::SearchUserResponse => "search_user_response",
            Self::CreateUserResponse => "create_user_response",
            Self::UpdateUserResponse => "update_user_response",
        }
    }

    /// File the fixture is read from, relative to the fixtures directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::UserResponse => "userResponse.json",
            Self::ErrorResponse => "errorResponse.json",
            Self::AccessTokenError => "access_token_error.json",
            Self::SingleUserResponse => "readUserResponse.json",
            Self::SearchUserResponse => "searchResponse.json",
            Self::CreateUserResponse => "createUserResponse.json",
            Self::UpdateUserResponse => "updateUserResponse.json",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|fixture| fixture.name() == name)
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The complete set of fixture bodies.
///
/// Only constructed by [`Fixtures::load`], which either reads every fixture or fails, so
/// every [`Fixture`] always has a body.
#[derive(Debug, Clone)]
pub struct Fixtures {
    dir: PathBuf,
    bodies: HashMap<Fixture, String>,
}

impl Fixtures {
    /// Read every fixture file from `dir`.
    ///
    /// # Returns
    /// - `Ok(Fixtures)` - All fixture files were read
    /// - `Err(TestError::FixtureRead)` - The first fixture that is missing or unreadable
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, TestError> {
        let dir = dir.as_ref().to_path_buf();
        let mut bodies = HashMap::with_capacity(Fixture::ALL.len());

        for fixture in Fixture::ALL {
            let path = dir.join(fixture.file_name());
            let body = std::fs::read_to_string(&path)
                .map_err(|source| TestError::FixtureRead {
                    fixture,
                    path: path.clone(),
                    source,
                })?;

            bodies.insert(fixture, body);
        }

        tracing::debug!(dir = %dir.display(), count = bodies.len(), "Loaded fixtures");

        Ok(Self { dir, bodies })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Verbatim text of `fixture`.
    pub fn get(&self, fixture: Fixture) -> &str {
        &self.bodies[&fixture]
    }

    /// Look a fixture up by its exposed key, e.g. `"user_response"`.
    pub fn by_name(&self, name: &str) -> Option<&str> {
        Fixture::from_name(name).map(|fixture| self.get(fixture))
    }

    /// Parse `fixture` as JSON.
    pub fn json(&self, fixture: Fixture) -> Result<serde_json::Value, TestError> {
        serde_json::from_str(self.get(fixture))
            .map_err(|source| TestError::FixtureJson { fixture, source })
    }

    /// All fixtures with their bodies, in [`Fixture::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Fixture, &str)> + '_ {
        Fixture::ALL
            .into_iter()
            .map(move |fixture| (fixture, self.get(fixture)))
    }
}
