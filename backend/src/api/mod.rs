//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the StudyVerse backend.

pub mod server;
pub mod types;

pub use server::start_server;
pub use types::*;
