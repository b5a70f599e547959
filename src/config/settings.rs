use crate::error::FixtureError;
use crate::resolver::ResolveOptions;
use camino::{Utf8Path, Utf8PathBuf};
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix for environment overrides of [`ResolverSettings`], e.g. `FIXTURES__STRICT_MODES`.
pub const SETTINGS_ENV_PREFIX: &str = "FIXTURES";

/// Serialization format of exported fixture files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureFormat {
    #[default]
    Yaml,
    Json,
}

impl FixtureFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            FixtureFormat::Yaml => "yaml",
            FixtureFormat::Json => "json",
        }
    }
}

impl fmt::Display for FixtureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FixtureFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(FixtureFormat::Yaml),
            "json" => Ok(FixtureFormat::Json),
            other => Err(FixtureError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Settings for the fixture exporter.
///
/// Layered: compiled defaults, then an optional YAML file, then
/// `FIXTURES__*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Reject unknown `APP_MODE` values instead of passing them through
    #[serde(default)]
    pub strict_modes: bool,

    #[serde(default = "default_output_dir")]
    pub output_dir: Utf8PathBuf,

    #[serde(default)]
    pub format: FixtureFormat,

    #[serde(default = "default_log_dir")]
    pub log_dir: Utf8PathBuf,

    #[serde(default)]
    pub debug_mode: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            strict_modes: false,
            output_dir: default_output_dir(),
            format: FixtureFormat::default(),
            log_dir: default_log_dir(),
            debug_mode: false,
        }
    }
}

fn default_output_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("fixtures")
}

fn default_log_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("logs")
}

impl ResolverSettings {
    /// Load settings from an optional YAML file plus the process environment.
    ///
    /// A missing file is not an error; the defaults apply.
    pub fn load(settings_file: Option<&Utf8Path>) -> Result<Self, FixtureError> {
        let mut builder = Config::builder();

        if let Some(path) = settings_file {
            if !path.exists() {
                tracing::warn!("Settings file not found at {}, using defaults", path);
            }
            builder = builder.add_source(
                File::new(path.as_str(), FileFormat::Yaml).required(false),
            );
        }

        let settings: ResolverSettings = builder
            .add_source(
                Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!("Loaded resolver settings: {:?}", settings);
        Ok(settings)
    }

    /// Parse settings from YAML text only, without consulting the environment.
    pub fn from_yaml_str(contents: &str) -> Result<Self, FixtureError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Yaml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            strict: self.strict_modes,
        }
    }
}
