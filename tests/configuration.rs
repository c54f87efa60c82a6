//! Tests for configuration loading

use atelier::Config;
use atelier_locale::Locale;
use atelier_notification::Region;
use serial_test::serial;

/// Sets process variables for the lifetime of the guard.
struct EnvVars(Vec<&'static str>);

impl EnvVars {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (name, value) in vars {
            // SAFETY: every test touching the environment runs under #[serial].
            unsafe { std::env::set_var(name, value) };
        }

        Self(vars.iter().map(|(name, _)| *name).collect())
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for name in &self.0 {
            // SAFETY: see `EnvVars::set`.
            unsafe { std::env::remove_var(name) };
        }
    }
}

fn load_default() -> Config {
    Config::load(Some("config/default.toml".to_string())).expect("Failed to load config")
}

#[test]
#[serial]
fn test_config_loads_from_default_toml() {
    let config = load_default();

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.locales.default, Locale::Fi);
    assert_eq!(config.locales.supported, vec![Locale::Fi, Locale::En]);
    assert_eq!(config.site.palette.primary, "#0f766e");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_config_defaults_without_file() {
    let config = Config::load(Some("config/does-not-exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.observability.log_level, "info");
    assert!(config.site.last_modified.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_email_debug_redacts_key() {
    let mut config = load_default();
    config.email.api_key = Some("key-very-secret".to_string());

    assert!(!format!("{config:?}").contains("key-very-secret"));
}

#[test]
#[serial]
fn test_legacy_mailgun_variables_override_file() {
    let _env = EnvVars::set(&[
        ("MAILGUN_API_KEY", "key-legacy"),
        ("MAILGUN_DOMAIN", "mg.atelier.test"),
        ("MAILGUN_REGION", " EU "),
    ]);

    let config = load_default();

    assert_eq!(config.email.api_key.as_deref(), Some("key-legacy"));
    assert_eq!(config.email.domain.as_deref(), Some("mg.atelier.test"));
    assert_eq!(config.email.region, Region::Eu);
}

#[test]
#[serial]
fn test_blank_mailgun_variables_are_ignored() {
    let _env = EnvVars::set(&[
        ("MAILGUN_API_KEY", "  "),
        ("MAILGUN_DOMAIN", ""),
        ("MAILGUN_REGION", ""),
    ]);

    let config = load_default();

    assert!(config.email.api_key.is_none());
    assert!(config.email.domain.is_none());
    assert_eq!(config.email.region, Region::Us);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_unknown_mailgun_region_is_rejected() {
    let _env = EnvVars::set(&[("MAILGUN_REGION", "asia")]);

    assert!(Config::load(Some("config/default.toml".to_string())).is_err());
}

#[test]
#[serial]
fn test_supported_locales_parse_from_environment_list() {
    let _env = EnvVars::set(&[
        ("ATELIER__LOCALES__SUPPORTED", "en,fi"),
        ("ATELIER__LOCALES__DEFAULT", "en"),
    ]);

    let config = load_default();

    assert_eq!(config.locales.supported, vec![Locale::En, Locale::Fi]);
    assert_eq!(config.locales.default, Locale::En);
    assert!(config.validate().is_ok());
}
