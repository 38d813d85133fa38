//! Tests for the test harness itself.
//!
//! Covers fixture loading, access token injection, the shared configuration cache and
//! fixture-backed mock endpoints.

mod access_token;
mod config;
mod endpoints;
mod fixtures;

use usergate_test_utils::prelude::*;
