//! spell-check web skeleton
//!
//! A minimal web application: an application factory over axum plus a
//! set of operator commands (test runner, linter, formatter, URL
//! dumper, artifact cleaner).

/// Application factory
pub mod app;

/// CLI commands
pub mod cli;

/// Error kinds and status pages
pub mod error;

/// HTTP request handlers
pub mod handlers;

/// Logging initialization
pub mod logging;

/// Route table
pub mod routes;

/// Server startup and shutdown
pub mod server;

/// Named application settings
pub mod settings;

/// Shared application state
pub mod state;
