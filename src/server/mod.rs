//! Server application core modules.
//!
//! Configuration loading, the access token seam, the application handle and the HTTP
//! routes built on top of it.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod token;
