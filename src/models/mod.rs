//! Data models for the fixture document.
//!
//! - [`Fixtures`]: The resolved document consumed by the Maestro runner
//! - [`AppConfig`]: Application id, mode catalog, selected mode, navigation and PIN policy
//! - [`ModeCatalog`]: Per-variant mode catalog (plain labels or full descriptors)
//! - [`PlatformDefaults`]: Compiled-in values for one [`PlatformVariant`], app section unresolved
//!
//! All types are plain values: built once, never mutated, and serializable so the
//! runner can read them from disk.

pub mod defaults;
pub mod fixtures;

pub use defaults::{AppDefaults, PlatformDefaults, PlatformVariant, app_defaults, platform_defaults};
pub use fixtures::{
    AppConfig, AppModeDescriptor, Credentials, DEFAULT_MODE, EnvironmentEndpoint, EnvironmentSet,
    Fixtures, LocatorSet, MODE_KEYS, MaestroTimeouts, ModeCatalog, ModeDescriptors, ModeLabels,
    PinPolicy, ReportingPaths, TestSettings, UserCredentialSet, UserCredentials,
};
