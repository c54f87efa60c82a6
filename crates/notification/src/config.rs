use serde::Deserialize;
use strum::{Display, EnumString};

pub const US_ENDPOINT: &str = "https://api.mailgun.net";
pub const EU_ENDPOINT: &str = "https://api.eu.mailgun.net";

#[derive(Deserialize, EnumString, Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Region::Us => US_ENDPOINT,
            Region::Eu => EU_ENDPOINT,
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub region: Region,
    /// Overrides the regional API base URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_from_local")]
    pub from_local: String,
    #[serde(default = "default_contact_name")]
    pub contact_name: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            domain: None,
            region: Region::default(),
            endpoint: None,
            from_name: default_from_name(),
            from_local: default_from_local(),
            contact_name: default_contact_name(),
            contact_address: default_contact_address(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("domain", &self.domain)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("from_name", &self.from_name)
            .field("from_local", &self.from_local)
            .field("contact_name", &self.contact_name)
            .field("contact_address", &self.contact_address)
            .field("subject_prefix", &self.subject_prefix)
            .finish()
    }
}

fn default_from_name() -> String {
    "Atelier".to_string()
}

fn default_from_local() -> String {
    "contact".to_string()
}

fn default_contact_name() -> String {
    "Atelier".to_string()
}

fn default_contact_address() -> String {
    "hello@atelier.localhost".to_string()
}

fn default_subject_prefix() -> String {
    "New message".to_string()
}

impl EmailConfig {
    /// Key and sending domain, or `None` while either is unset or blank.
    pub fn credentials(&self) -> Option<Credentials> {
        let api_key = self.api_key.as_deref().map(str::trim).unwrap_or_default();
        let domain = self.domain.as_deref().map(str::trim).unwrap_or_default();

        if api_key.is_empty() || domain.is_empty() {
            return None;
        }

        Some(Credentials {
            api_key: api_key.to_owned(),
            domain: domain.to_owned(),
        })
    }

    pub fn endpoint(&self) -> String {
        match self.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint.trim_end_matches('/').to_owned(),
            _ => self.region.endpoint().to_owned(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub domain: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[redacted]")
            .field("domain", &self.domain)
            .finish()
    }
}
