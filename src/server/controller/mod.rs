//! HTTP controller endpoints for the usergate API.

pub mod health;
