//! Test harness for usergate.
//!
//! Builds a [`TestContext`] holding the `test` profile configuration, the application
//! handle with an [`AccessTokenMock`] attached, the static JSON fixtures and a mockito
//! server standing in for the identity provider.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod shared;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use fixtures::{token::AccessTokenMock, Fixture, Fixtures};

/// Install a tracing subscriber writing through the test harness' captured output.
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "usergate=debug".into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

pub mod prelude {
    pub use crate::{
        init_tracing, AccessTokenMock, Fixture, Fixtures, TestBuilder, TestContext, TestError,
    };
}
