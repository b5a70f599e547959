//! CLI argument definitions.
//!
//! Command-line flags take precedence over [`ResolverSettings`] loaded from the
//! settings file and `FIXTURES__*` variables. `APP_MODE` is never a flag; it
//! is read from the environment during resolution.

use crate::config::{FixtureFormat, ResolverSettings};
use crate::models::PlatformVariant;
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Export resolved Maestro fixture documents
#[derive(Parser, Debug)]
#[command(name = "maestro-fixtures")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Platform variant(s) to resolve
    #[arg(long, value_enum, default_value_t = VariantArg::All)]
    pub variant: VariantArg,

    /// Settings file path (YAML)
    #[arg(short, long, env = "FIXTURES_SETTINGS")]
    pub settings: Option<Utf8PathBuf>,

    /// Directory receiving the fixture files
    #[arg(short, long, env = "FIXTURES_OUTPUT_DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Output format (yaml or json)
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<FixtureFormat>,

    /// Reject APP_MODE values that are not a known mode
    #[arg(long)]
    pub strict: bool,

    /// Print documents to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Android,
    Ios,
    All,
}

impl VariantArg {
    pub fn variants(&self) -> Vec<PlatformVariant> {
        match self {
            VariantArg::Android => vec![PlatformVariant::Android],
            VariantArg::Ios => vec![PlatformVariant::Ios],
            VariantArg::All => PlatformVariant::ALL.to_vec(),
        }
    }
}

fn parse_format(value: &str) -> Result<FixtureFormat, String> {
    value.parse::<FixtureFormat>().map_err(|e| e.to_string())
}

impl Cli {
    /// Apply command-line flags on top of loaded settings.
    pub fn apply_to(&self, mut settings: ResolverSettings) -> ResolverSettings {
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings.strict_modes |= self.strict;
        settings.debug_mode |= self.debug;
        settings
    }
}
