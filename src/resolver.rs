//! Mode resolution and fixture assembly.
//!
//! Resolution is a pure function of the compiled-in defaults and one optional
//! override value:
//!
//! - Rich catalogs (iOS): a non-empty override becomes `currentMode` verbatim,
//!   even when the catalog has no such key. Absent or empty falls back to the
//!   default mode.
//! - Simple catalogs (Android): `currentMode` is always the compiled-in
//!   default mode.
//!
//! [`FixtureResolver`] wires this to an [`EnvSource`] and produces the full
//! [`Fixtures`] document.

use crate::env::{APP_MODE_VAR, EnvSource};
use crate::error::ResolveError;
use crate::models::{
    AppConfig, AppDefaults, Fixtures, MODE_KEYS, ModeCatalog, PlatformDefaults, PlatformVariant,
    platform_defaults,
};

/// Knobs for [`resolve_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Reject overrides the rich catalog does not define
    pub strict: bool,
}

impl ResolveOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Resolve the app section with the permissive default behaviour.
pub fn resolve(defaults: &AppDefaults, environment_override: Option<&str>) -> AppConfig {
    AppConfig {
        app_id: defaults.app_id.clone(),
        modes: defaults.modes.clone(),
        current_mode: select_mode(defaults, environment_override).to_string(),
        navigation: defaults.navigation.clone(),
        pin: defaults.pin.clone(),
    }
}

/// Resolve the app section, optionally rejecting unknown override values.
///
/// Strict checking only applies to catalogs that honour overrides; a simple
/// catalog ignores the override whatever it is.
pub fn resolve_with(
    defaults: &AppDefaults,
    environment_override: Option<&str>,
    options: ResolveOptions,
) -> Result<AppConfig, ResolveError> {
    let config = resolve(defaults, environment_override);

    if options.strict
        && defaults.modes.supports_override()
        && !defaults.modes.contains(&config.current_mode)
    {
        return Err(ResolveError::UnknownMode {
            mode: config.current_mode,
            known: MODE_KEYS.iter().map(|k| k.to_string()).collect(),
        });
    }

    Ok(config)
}

fn select_mode<'a>(defaults: &'a AppDefaults, environment_override: Option<&'a str>) -> &'a str {
    match &defaults.modes {
        ModeCatalog::SimpleLabels(_) => {
            if let Some(value) = environment_override.filter(|v| !v.is_empty()) {
                tracing::debug!(
                    "Ignoring {}={} for a catalog without override support",
                    APP_MODE_VAR,
                    value
                );
            }
            defaults.default_mode.as_str()
        }
        ModeCatalog::RichDescriptors(_) => match environment_override {
            Some(value) if !value.is_empty() => {
                tracing::debug!("Mode selected from {}: {}", APP_MODE_VAR, value);
                value
            }
            _ => {
                tracing::debug!(
                    "{} not set, using default mode {}",
                    APP_MODE_VAR,
                    defaults.default_mode
                );
                defaults.default_mode.as_str()
            }
        },
    }
}

/// Assemble a complete fixture document from `defaults`.
pub fn build_fixtures(
    defaults: &PlatformDefaults,
    environment_override: Option<&str>,
    options: ResolveOptions,
) -> Result<Fixtures, ResolveError> {
    let app = resolve_with(&defaults.app, environment_override, options)?;

    Ok(Fixtures {
        bitfinex: defaults.bitfinex.clone(),
        app,
        test_settings: defaults.test_settings.clone(),
        locators: defaults.locators.clone(),
        users: defaults.users.clone(),
        environments: defaults.environments.clone(),
    })
}

/// Builds fixture documents, reading `APP_MODE` through an [`EnvSource`].
#[derive(Debug, Clone)]
pub struct FixtureResolver<E> {
    env: E,
    options: ResolveOptions,
}

impl<E: EnvSource> FixtureResolver<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Resolve the compiled-in defaults of `variant`.
    pub fn resolve_variant(&self, variant: PlatformVariant) -> Result<Fixtures, ResolveError> {
        self.resolve_defaults(&platform_defaults(variant))
    }

    /// Resolve caller-supplied defaults.
    pub fn resolve_defaults(&self, defaults: &PlatformDefaults) -> Result<Fixtures, ResolveError> {
        let environment_override = self.env.get_env(APP_MODE_VAR);
        let fixtures = build_fixtures(defaults, environment_override.as_deref(), self.options)?;

        tracing::info!(
            "Resolved {} fixtures: app={}, mode={}",
            defaults.variant,
            fixtures.app.app_id,
            fixtures.app.current_mode
        );

        Ok(fixtures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapEnv, MockEnvSource};
    use crate::models::app_defaults;
    use mockall::predicate::eq;

    #[test]
    fn test_rich_override_selects_full() {
        let config = resolve(&app_defaults(PlatformVariant::Ios), Some("full"));
        assert_eq!(config.current_mode, "full");
        assert_eq!(config.current_descriptor().unwrap().timeout, 15000);
    }

    #[test]
    fn test_rich_missing_or_empty_override_defaults_to_lite() {
        let defaults = app_defaults(PlatformVariant::Ios);
        assert_eq!(resolve(&defaults, None).current_mode, "lite");
        assert_eq!(resolve(&defaults, Some("")).current_mode, "lite");
    }

    #[test]
    fn test_rich_unknown_override_passes_through() {
        let config = resolve(&app_defaults(PlatformVariant::Ios), Some("unexpected_value"));
        assert_eq!(config.current_mode, "unexpected_value");
        assert!(config.current_descriptor().is_none());
    }

    #[test]
    fn test_simple_ignores_override() {
        let defaults = app_defaults(PlatformVariant::Android);
        for value in [None, Some(""), Some("full"), Some("unexpected_value")] {
            assert_eq!(resolve(&defaults, value).current_mode, defaults.default_mode);
        }
    }

    #[test]
    fn test_strict_rejects_unknown_rich_mode() {
        let err = resolve_with(
            &app_defaults(PlatformVariant::Ios),
            Some("pro"),
            ResolveOptions::strict(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ResolveError::UnknownMode {
                mode: "pro".to_string(),
                known: vec!["lite".to_string(), "full".to_string()],
            }
        );
    }

    #[test]
    fn test_strict_accepts_known_modes_and_simple_catalogs() {
        let rich = app_defaults(PlatformVariant::Ios);
        assert!(resolve_with(&rich, Some("full"), ResolveOptions::strict()).is_ok());
        assert!(resolve_with(&rich, None, ResolveOptions::strict()).is_ok());

        let simple = app_defaults(PlatformVariant::Android);
        assert!(resolve_with(&simple, Some("pro"), ResolveOptions::strict()).is_ok());
    }

    #[test]
    fn test_resolver_reads_app_mode_once() {
        let mut env = MockEnvSource::new();
        env.expect_get_env()
            .with(eq(APP_MODE_VAR))
            .times(1)
            .returning(|_| Some("full".to_string()));

        let fixtures = FixtureResolver::new(env)
            .resolve_variant(PlatformVariant::Ios)
            .unwrap();
        assert_eq!(fixtures.app.current_mode, "full");
    }

    #[test]
    fn test_resolver_copies_non_app_sections() {
        let defaults = platform_defaults(PlatformVariant::Ios);
        let fixtures = FixtureResolver::new(MapEnv::new().with(APP_MODE_VAR, "full"))
            .resolve_defaults(&defaults)
            .unwrap();

        assert_eq!(fixtures.bitfinex, defaults.bitfinex);
        assert_eq!(fixtures.test_settings, defaults.test_settings);
        assert_eq!(fixtures.locators, defaults.locators);
        assert_eq!(fixtures.users, defaults.users);
        assert_eq!(fixtures.environments, defaults.environments);
    }
}
