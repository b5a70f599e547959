use thiserror::Error;

/// Errors raised by opt-in strict mode resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown app mode {mode:?}, expected one of {known:?}")]
    UnknownMode { mode: String, known: Vec<String> },
}

/// Errors that can occur while loading exporter settings
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Settings error: {0}")]
    Settings(#[from] ::config::ConfigError),

    #[error("Unsupported fixture format: {0}")]
    UnsupportedFormat(String),
}
