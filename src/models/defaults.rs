//! Compiled-in fixture values for each platform.
//!
//! These are the literal values the Maestro flows run against. Everything here
//! is data; the only decision made at runtime is which mode is current, and
//! that lives in [`crate::resolver`].
//!
//! Only the app id, the runner timeouts and the reporting paths differ between
//! platforms. The mode catalog differs in shape: Android carries labels only.

use super::fixtures::{
    AppModeDescriptor, Credentials, DEFAULT_MODE, EnvironmentEndpoint, EnvironmentSet, LocatorSet,
    MaestroTimeouts, ModeCatalog, ModeDescriptors, ModeLabels, PinPolicy, ReportingPaths,
    TestSettings, UserCredentialSet, UserCredentials,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target platform of a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformVariant {
    /// Simple catalog: modes are plain labels, current mode is fixed
    Android,
    /// Rich catalog: modes carry full descriptors, current mode follows `APP_MODE`
    Ios,
}

impl PlatformVariant {
    pub const ALL: [PlatformVariant; 2] = [PlatformVariant::Android, PlatformVariant::Ios];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformVariant::Android => "android",
            PlatformVariant::Ios => "ios",
        }
    }
}

impl fmt::Display for PlatformVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformVariant {
    type Err = String;

    /// Accepts platform names and the catalog flavour (`simple`, `rich`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" | "simple" => Ok(PlatformVariant::Android),
            "ios" | "rich" => Ok(PlatformVariant::Ios),
            other => Err(format!("unknown platform variant: {}", other)),
        }
    }
}

/// Application section before mode resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDefaults {
    pub app_id: String,
    pub modes: ModeCatalog,

    /// Mode used when nothing overrides it. For simple catalogs this is the
    /// only mode ever selected.
    pub default_mode: String,
    pub navigation: IndexMap<String, String>,
    pub pin: PinPolicy,
}

/// Everything a platform's fixture file defines, with the app section
/// still unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDefaults {
    pub variant: PlatformVariant,
    pub bitfinex: Credentials,
    pub app: AppDefaults,
    pub test_settings: TestSettings,
    pub locators: LocatorSet,
    pub users: UserCredentialSet,
    pub environments: EnvironmentSet,
}

fn table(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn features(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Compiled-in defaults for `variant`.
pub fn platform_defaults(variant: PlatformVariant) -> PlatformDefaults {
    PlatformDefaults {
        variant,
        bitfinex: default_credentials(),
        app: app_defaults(variant),
        test_settings: test_settings(variant),
        locators: default_locators(),
        users: default_users(),
        environments: default_environments(),
    }
}

fn app_id(variant: PlatformVariant) -> &'static str {
    match variant {
        PlatformVariant::Android => "com.bitfinex.mobileapp.dev",
        PlatformVariant::Ios => "com.bitfinex.bfxdev",
    }
}

/// App section defaults for `variant`.
pub fn app_defaults(variant: PlatformVariant) -> AppDefaults {
    let modes = match variant {
        PlatformVariant::Android => ModeCatalog::SimpleLabels(ModeLabels {
            lite: "Lite".to_string(),
            full: "Full".to_string(),
        }),
        PlatformVariant::Ios => ModeCatalog::RichDescriptors(ModeDescriptors {
            lite: AppModeDescriptor {
                name: "Lite".to_string(),
                selector: "Lite.*".to_string(),
                timeout: 10000,
                features: features(&["basic_trading", "wallet_view", "simple_navigation"]),
            },
            full: AppModeDescriptor {
                name: "Full".to_string(),
                selector: "Full.*".to_string(),
                timeout: 15000,
                features: features(&[
                    "advanced_trading",
                    "full_wallet",
                    "complete_navigation",
                    "analytics",
                    "advanced_orders",
                ]),
            },
        }),
    };

    AppDefaults {
        app_id: app_id(variant).to_string(),
        modes,
        default_mode: DEFAULT_MODE.to_string(),
        navigation: table(&[
            ("continue", "Continue"),
            ("signIn", "Sign in"),
            ("login", "Login"),
            ("menu", "Menu"),
            ("profile", "Profile"),
        ]),
        pin: PinPolicy {
            default_pin: "5".to_string(),
            length: 4,
            confirm_text: "Confirm PIN".to_string(),
            success_text: "PIN created successfully".to_string(),
            create_pin_text: "Create a 4-digit PIN".to_string(),
        },
    }
}

fn default_credentials() -> Credentials {
    Credentials {
        api_key: "ea69b2a8517ac37c1499207741c2392566d28a9d880".to_string(),
        secret_key: "06ecd3c6b560b32003451f244cb302c258eb5ebcd82".to_string(),
    }
}

fn test_settings(variant: PlatformVariant) -> TestSettings {
    let (timeout, maestro) = match variant {
        PlatformVariant::Android => (
            30000,
            MaestroTimeouts {
                driver_timeout: 30000,
                element_timeout: 10000,
                animation_timeout: 1000,
            },
        ),
        PlatformVariant::Ios => (
            25000,
            MaestroTimeouts {
                driver_timeout: 25000,
                element_timeout: 8000,
                animation_timeout: 500,
            },
        ),
    };

    let output_dir = format!("reports/{}", variant);
    TestSettings {
        timeout,
        maestro,
        reporting: ReportingPaths {
            screenshots_dir: format!("{}/screenshots", output_dir),
            videos_dir: format!("{}/videos", output_dir),
            xml_report: format!("{}/test-results.xml", output_dir),
            output_dir,
        },
    }
}

fn default_locators() -> LocatorSet {
    LocatorSet {
        login: table(&[
            ("emailField", "login_email"),
            ("apiKeyField", "Login-Public-Key-Input"),
            ("secretKeyField", "Login-Secret-Key-Input"),
            ("apiKeyText", "API Key"),
            ("keyText", "Key"),
        ]),
        pin: table(&[
            ("createPinText", "Create a 4-digit PIN"),
            ("pinInput", "pin_input"),
            ("confirmButton", "Confirm"),
            ("continueButton", "Continue"),
        ]),
        dashboard: table(&[
            ("wallet", "Wallet"),
            ("home", "Home"),
            ("dashboard", "Dashboard"),
        ]),
    }
}

fn default_users() -> UserCredentialSet {
    UserCredentialSet {
        test_user: UserCredentials {
            email: "test@example.com".to_string(),
            password: "testpassword123".to_string(),
        },
        demo_user: UserCredentials {
            email: "demo@example.com".to_string(),
            password: "demopassword456".to_string(),
        },
    }
}

fn default_environments() -> EnvironmentSet {
    EnvironmentSet {
        development: EnvironmentEndpoint {
            base_url: "https://dev-api.example.com".to_string(),
            timeout: 10000,
        },
        staging: EnvironmentEndpoint {
            base_url: "https://staging-api.example.com".to_string(),
            timeout: 15000,
        },
        production: EnvironmentEndpoint {
            base_url: "https://api.example.com".to_string(),
            timeout: 20000,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MODE_KEYS;

    #[test]
    fn test_variant_catalog_shapes() {
        assert!(matches!(
            app_defaults(PlatformVariant::Android).modes,
            ModeCatalog::SimpleLabels(_)
        ));
        assert!(matches!(
            app_defaults(PlatformVariant::Ios).modes,
            ModeCatalog::RichDescriptors(_)
        ));
    }

    #[test]
    fn test_ios_defaults_cover_every_mode_key() {
        let app = app_defaults(PlatformVariant::Ios);
        for key in MODE_KEYS {
            assert!(app.modes.descriptor(key).is_some(), "missing {}", key);
        }
        assert_eq!(app.default_mode, "lite");

        let lite = app.modes.descriptor("lite").unwrap();
        assert_eq!(lite.selector, "Lite.*");
        assert_eq!(lite.timeout, 10000);
        assert_eq!(
            lite.features,
            vec!["basic_trading", "wallet_view", "simple_navigation"]
        );
        assert_eq!(app.modes.descriptor("full").unwrap().features.len(), 5);
    }

    #[test]
    fn test_pin_policy_values() {
        for variant in PlatformVariant::ALL {
            let pin = app_defaults(variant).pin;
            assert_eq!(pin.default_pin, "5");
            assert_eq!(pin.length, 4);
            assert_eq!(pin.create_pin_text, "Create a 4-digit PIN");
        }
    }

    #[test]
    fn test_platform_specific_values() {
        let android = platform_defaults(PlatformVariant::Android);
        assert_eq!(android.app.app_id, "com.bitfinex.mobileapp.dev");
        assert_eq!(android.test_settings.timeout, 30000);
        assert_eq!(
            android.test_settings.maestro,
            MaestroTimeouts {
                driver_timeout: 30000,
                element_timeout: 10000,
                animation_timeout: 1000,
            }
        );
        assert_eq!(
            android.test_settings.reporting.xml_report,
            "reports/android/test-results.xml"
        );

        let ios = platform_defaults(PlatformVariant::Ios);
        assert_eq!(ios.app.app_id, "com.bitfinex.bfxdev");
        assert_eq!(ios.test_settings.timeout, 25000);
        assert_eq!(ios.test_settings.maestro.animation_timeout, 500);
        assert_eq!(ios.test_settings.reporting.output_dir, "reports/ios");
        assert_eq!(
            ios.test_settings.reporting.screenshots_dir,
            "reports/ios/screenshots"
        );
    }

    #[test]
    fn test_shared_sections_identical_across_platforms() {
        let android = platform_defaults(PlatformVariant::Android);
        let ios = platform_defaults(PlatformVariant::Ios);
        assert_eq!(android.bitfinex, ios.bitfinex);
        assert_eq!(android.locators, ios.locators);
        assert_eq!(android.users, ios.users);
        assert_eq!(android.environments, ios.environments);
        assert_eq!(android.app.navigation, ios.app.navigation);
        assert_eq!(android.locators.login["emailField"], "login_email");
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("ios".parse::<PlatformVariant>(), Ok(PlatformVariant::Ios));
        assert_eq!("rich".parse::<PlatformVariant>(), Ok(PlatformVariant::Ios));
        assert_eq!("ANDROID".parse::<PlatformVariant>(), Ok(PlatformVariant::Android));
        assert_eq!("simple".parse::<PlatformVariant>(), Ok(PlatformVariant::Android));
        assert!("desktop".parse::<PlatformVariant>().is_err());
    }
}
