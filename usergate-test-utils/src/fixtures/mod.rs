//! Test fixtures: static JSON bodies, the access token mock and mock HTTP endpoints.
//!
//! - `file` - The known fixture files and the eagerly loaded fixture set
//! - `token` - Access token provider mock injected into the application
//! - `response` - Mock HTTP endpoints answering with fixture bodies

pub mod file;
pub mod response;
pub mod token;

pub use file::{Fixture, Fixtures};
