pub mod settings;

pub use settings::{FixtureFormat, ResolverSettings, SETTINGS_ENV_PREFIX};

use crate::models::{Fixtures, PlatformVariant};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Fixture store for writing and reading resolved fixture documents.
///
/// One file per platform variant inside the output directory:
/// - `android.yaml` / `android.json`
/// - `ios.yaml` / `ios.json`
///
/// The Maestro runner reads these files instead of a shared global namespace.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    output_dir: Utf8PathBuf,
    format: FixtureFormat,
}

impl FixtureStore {
    /// Create a new FixtureStore writing into `output_dir`.
    ///
    /// # Arguments
    /// * `output_dir` - Directory receiving the fixture files (created if missing)
    /// * `format` - Serialization format used by [`save_fixtures`](Self::save_fixtures)
    pub fn new<P: AsRef<Utf8Path>>(output_dir: P, format: FixtureFormat) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();

        if !output_dir.exists() {
            fs::create_dir_all(&output_dir)
                .with_context(|| format!("Failed to create fixture directory: {}", output_dir))?;
        }

        Ok(Self { output_dir, format })
    }

    /// Path of the fixture file for `variant` in the store's format.
    pub fn fixture_path(&self, variant: PlatformVariant) -> Utf8PathBuf {
        self.output_dir
            .join(format!("{}.{}", variant, self.format.extension()))
    }

    /// Serialize `fixtures` in the store's format.
    pub fn render(&self, fixtures: &Fixtures) -> Result<String> {
        render_fixtures(fixtures, self.format)
    }

    /// Save the fixture document for `variant`.
    ///
    /// # Returns
    /// The path that was written
    pub fn save_fixtures(&self, variant: PlatformVariant, fixtures: &Fixtures) -> Result<Utf8PathBuf> {
        let path = self.fixture_path(variant);
        let contents = self.render(fixtures)?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write fixtures: {}", path))?;

        tracing::info!("Saved {} fixtures to {}", variant, path);
        Ok(path)
    }

    /// Load the fixture document for `variant`.
    ///
    /// Looks for the store's format first, then the other format.
    pub fn load_fixtures(&self, variant: PlatformVariant) -> Result<Fixtures> {
        let candidates = [FixtureFormat::Yaml, FixtureFormat::Json];
        let ordered = std::iter::once(self.format)
            .chain(candidates.into_iter().filter(|f| *f != self.format));

        for format in ordered {
            let path = self
                .output_dir
                .join(format!("{}.{}", variant, format.extension()));
            if path.exists() {
                return load_fixture_file(&path, format);
            }
        }

        anyhow::bail!(
            "No {} fixtures found in {}",
            variant,
            self.output_dir
        )
    }

    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    pub fn format(&self) -> FixtureFormat {
        self.format
    }
}

/// Serialize `fixtures` as `format`.
pub fn render_fixtures(fixtures: &Fixtures, format: FixtureFormat) -> Result<String> {
    match format {
        FixtureFormat::Yaml => {
            serde_yaml_ng::to_string(fixtures).context("Failed to serialize fixtures to YAML")
        }
        FixtureFormat::Json => {
            serde_json::to_string_pretty(fixtures).context("Failed to serialize fixtures to JSON")
        }
    }
}

fn load_fixture_file(path: &Utf8Path, format: FixtureFormat) -> Result<Fixtures> {
    let file_contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read fixtures: {}", path))?;

    let fixtures: Fixtures = match format {
        FixtureFormat::Yaml => serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse fixtures: {}", path))?,
        FixtureFormat::Json => serde_json::from_str(&file_contents)
            .with_context(|| format!("Failed to parse fixtures: {}", path))?,
    };

    tracing::info!("Loaded fixtures from {}", path);
    Ok(fixtures)
}
