use atelier_locale::LocaleConfig;
use atelier_notification::EmailConfig;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub locales: LocaleConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Public origin used for canonical links, Open Graph URLs and the sitemap.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_short_name")]
    pub short_name: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default = "default_og_image")]
    pub og_image: String,
    /// Fixed `YYYY-MM-DD` written as sitemap `lastmod`; omitted when unset.
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub palette: Palette,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            name: default_site_name(),
            short_name: default_short_name(),
            owner: default_owner(),
            twitter_handle: None,
            og_image: default_og_image(),
            last_modified: None,
            palette: Palette::default(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_site_name() -> String {
    "Atelier".to_string()
}

fn default_short_name() -> String {
    "Atelier".to_string()
}

fn default_owner() -> String {
    "Atelier".to_string()
}

fn default_og_image() -> String {
    "/static/og-image.svg".to_string()
}

/// Colour tokens shared by every page variant.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#0f766e".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#f8fafc".to_string(),
            text: "#0f172a".to_string(),
        }
    }
}

impl Palette {
    fn tokens(&self) -> [(&'static str, &str); 4] {
        [
            ("primary", &self.primary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
        ]
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };

    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Unset and blank provider variables are both treated as absent.
fn legacy_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn is_iso_date(value: &str) -> bool {
    let parts = value.split('-').collect::<Vec<_>>();

    matches!(parts.as_slice(), [y, m, d]
        if y.len() == 4 && m.len() == 2 && d.len() == 2
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())))
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy provider variables (MAILGUN_API_KEY, MAILGUN_DOMAIN, MAILGUN_REGION)
    /// 2. Environment variables (ATELIER__SITE__BASE_URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ATELIER")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("locales.supported"),
        );

        if let Some(api_key) = legacy_var("MAILGUN_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }
        if let Some(domain) = legacy_var("MAILGUN_DOMAIN") {
            builder = builder.set_override("email.domain", domain)?;
        }
        if let Some(region) = legacy_var("MAILGUN_REGION") {
            builder = builder.set_override("email.region", region.to_lowercase())?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        match url::Url::parse(&self.site.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(format!(
                    "Site base_url must use http or https, got {}",
                    url.scheme()
                ));
            }
            Err(e) => return Err(format!("Invalid site base_url: {e}")),
        }

        self.locales
            .validate()
            .map_err(|e| format!("Invalid locales: {e}"))?;

        for (name, value) in self.site.palette.tokens() {
            if !is_hex_color(value) {
                return Err(format!(
                    "Palette {name} must be a hex colour like #0f766e, got {value}"
                ));
            }
        }

        if let Some(date) = self
            .site
            .last_modified
            .as_deref()
            .filter(|date| !is_iso_date(date))
        {
            return Err(format!(
                "Site last_modified must be YYYY-MM-DD, got {date}"
            ));
        }

        Ok(())
    }
}
