//! Server-side application models.

pub mod app;
