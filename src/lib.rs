// Maestro Fixtures - platform fixture values for Maestro mobile UI tests
//
// This is the library crate containing the fixture data model, the compiled-in
// per-platform values and the APP_MODE resolution. The binary crate (main.rs)
// exports resolved fixtures for the test runner.

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod models;
pub mod resolver;

// Re-export commonly used types for convenience
pub use crate::config::{FixtureFormat, FixtureStore, ResolverSettings};
pub use env::{APP_MODE_VAR, EnvSource, MapEnv, ProcessEnv};
pub use error::{FixtureError, ResolveError};
pub use models::{AppConfig, Fixtures, ModeCatalog, PlatformVariant};
pub use resolver::{FixtureResolver, ResolveOptions, build_fixtures, resolve, resolve_with};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
