use std::path::PathBuf;

use thiserror::Error;
use usergate::server::error::config::ConfigError;

use crate::fixtures::Fixture;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to read fixture {fixture} from {path}: {source}")]
    FixtureRead {
        fixture: Fixture,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Fixture {fixture} is not valid JSON: {source}")]
    FixtureJson {
        fixture: Fixture,
        source: serde_json::Error,
    },
    #[error(transparent)]
    App(#[from] usergate::server::error::Error),
}
