use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode key used when nothing selects one explicitly.
pub const DEFAULT_MODE: &str = "lite";

/// Mode keys every catalog defines, in display order.
pub const MODE_KEYS: [&str; 2] = ["lite", "full"];

/// Complete fixture document handed to the Maestro test runner.
///
/// The six top-level keys are the contract with the runner's flows and must
/// not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    pub bitfinex: Credentials,
    pub app: AppConfig,
    pub test_settings: TestSettings,
    pub locators: LocatorSet,
    pub users: UserCredentialSet,
    pub environments: EnvironmentSet,
}

/// Exchange API credentials. Opaque tokens, passed through verbatim.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// One operating profile of the app under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppModeDescriptor {
    /// Display name shown in the app header
    pub name: String,

    /// Pattern the runner uses to match mode-specific UI elements
    #[serde(default)]
    pub selector: String,

    /// Mode-specific wait timeout in milliseconds
    pub timeout: u64,

    /// Feature flags available in this mode, in display order
    #[serde(default)]
    pub features: Vec<String>,
}

impl AppModeDescriptor {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Plain display labels for the `lite` and `full` modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeLabels {
    pub lite: String,
    pub full: String,
}

/// Full descriptors for the `lite` and `full` modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDescriptors {
    pub lite: AppModeDescriptor,
    pub full: AppModeDescriptor,
}

/// Mode catalog of a platform variant.
///
/// Android only knows display labels and has no mode override; iOS carries
/// full descriptors and honours `APP_MODE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModeCatalog {
    RichDescriptors(ModeDescriptors),
    SimpleLabels(ModeLabels),
}

impl ModeCatalog {
    /// Whether the catalog defines `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.label(key).is_some()
    }

    /// Whether an environment override may change the selected mode.
    pub fn supports_override(&self) -> bool {
        matches!(self, ModeCatalog::RichDescriptors(_))
    }

    /// Descriptor for `key`. `None` for simple catalogs and for unknown keys.
    pub fn descriptor(&self, key: &str) -> Option<&AppModeDescriptor> {
        match self {
            ModeCatalog::RichDescriptors(modes) => match key {
                "lite" => Some(&modes.lite),
                "full" => Some(&modes.full),
                _ => None,
            },
            ModeCatalog::SimpleLabels(_) => None,
        }
    }

    /// Display label for `key`, whichever shape the catalog has.
    pub fn label(&self, key: &str) -> Option<&str> {
        match self {
            ModeCatalog::SimpleLabels(labels) => match key {
                "lite" => Some(labels.lite.as_str()),
                "full" => Some(labels.full.as_str()),
                _ => None,
            },
            ModeCatalog::RichDescriptors(_) => self.descriptor(key).map(|d| d.name.as_str()),
        }
    }
}

/// PIN screen policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinPolicy {
    /// Digit the runner taps `length` times, kept as a string
    pub default_pin: String,
    pub length: u32,
    pub confirm_text: String,
    pub success_text: String,
    pub create_pin_text: String,
}

/// Application section of the fixture document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub app_id: String,
    pub modes: ModeCatalog,

    /// Selected mode key. Not validated against `modes`.
    pub current_mode: String,

    /// Logical destination -> tab/menu label
    pub navigation: IndexMap<String, String>,
    pub pin: PinPolicy,
}

impl AppConfig {
    /// Descriptor of the selected mode, if the catalog has one for it.
    pub fn current_descriptor(&self) -> Option<&AppModeDescriptor> {
        self.modes.descriptor(&self.current_mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaestroTimeouts {
    pub driver_timeout: u64,
    pub element_timeout: u64,
    pub animation_timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingPaths {
    pub output_dir: String,
    pub screenshots_dir: String,
    pub videos_dir: String,
    pub xml_report: String,
}

/// Runner-wide settings. All timeouts are milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSettings {
    pub timeout: u64,
    pub maestro: MaestroTimeouts,
    pub reporting: ReportingPaths,
}

/// Element identifiers per screen, keyed by logical role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorSet {
    pub login: IndexMap<String, String>,
    pub pin: IndexMap<String, String>,
    pub dashboard: IndexMap<String, String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentialSet {
    pub test_user: UserCredentials,
    pub demo_user: UserCredentials,
}

impl UserCredentialSet {
    /// Look up a user by its label (`testUser` or `demoUser`).
    pub fn get(&self, label: &str) -> Option<&UserCredentials> {
        match label {
            "testUser" => Some(&self.test_user),
            "demoUser" => Some(&self.demo_user),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentEndpoint {
    pub base_url: String,
    pub timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSet {
    pub development: EnvironmentEndpoint,
    pub staging: EnvironmentEndpoint,
    pub production: EnvironmentEndpoint,
}

impl EnvironmentSet {
    pub fn get(&self, label: &str) -> Option<&EnvironmentEndpoint> {
        match label {
            "development" => Some(&self.development),
            "staging" => Some(&self.staging),
            "production" => Some(&self.production),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, timeout: u64, features: &[&str]) -> AppModeDescriptor {
        AppModeDescriptor {
            name: name.to_string(),
            selector: String::new(),
            timeout,
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_rich_catalog_lookup() {
        let catalog = ModeCatalog::RichDescriptors(ModeDescriptors {
            lite: descriptor("Lite", 10000, &["a"]),
            full: descriptor("Full", 15000, &["a", "b"]),
        });

        assert!(catalog.supports_override());
        assert_eq!(catalog.descriptor("full").unwrap().timeout, 15000);
        assert_eq!(catalog.label("lite"), Some("Lite"));
        assert!(catalog.descriptor("pro").is_none());
        assert!(!catalog.contains("pro"));
    }

    #[test]
    fn test_simple_catalog_has_no_descriptors() {
        let catalog = ModeCatalog::SimpleLabels(ModeLabels {
            lite: "Lite".to_string(),
            full: "Full".to_string(),
        });

        assert!(!catalog.supports_override());
        assert!(catalog.descriptor("lite").is_none());
        assert_eq!(catalog.label("full"), Some("Full"));
    }

    #[test]
    fn test_feature_membership_ignores_order() {
        let mode = descriptor("Full", 15000, &["b", "a"]);
        assert!(mode.has_feature("a"));
        assert!(!mode.has_feature("c"));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials {
            api_key: "key-123".to_string(),
            secret_key: "secret-456".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("key-123"));
        assert!(!printed.contains("secret-456"));
    }

    #[test]
    fn test_untagged_catalog_deserializes_both_shapes() {
        let simple: ModeCatalog = serde_yaml_ng::from_str("lite: Lite\nfull: Full\n").unwrap();
        assert!(matches!(simple, ModeCatalog::SimpleLabels(_)));

        let rich: ModeCatalog = serde_yaml_ng::from_str(
            "lite: {name: Lite, timeout: 10000}\nfull: {name: Full, timeout: 15000, features: [a, b]}\n",
        )
        .unwrap();
        assert_eq!(rich.descriptor("full").unwrap().features, vec!["a", "b"]);
    }
}
