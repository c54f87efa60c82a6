use serde::Deserialize;

use crate::Locale;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocaleConfigError {
    #[error("at least one supported locale is required")]
    Empty,

    #[error("default locale `{0}` is not in the supported set")]
    DefaultNotSupported(Locale),

    #[error("locale `{0}` is listed more than once")]
    Duplicate(Locale),
}

/// Supported locales in display order plus the one served for unprefixed paths.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LocaleConfig {
    pub supported: Vec<Locale>,
    pub default: Locale,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: vec![Locale::Fi, Locale::En],
            default: Locale::Fi,
        }
    }
}

impl LocaleConfig {
    pub fn validate(&self) -> Result<(), LocaleConfigError> {
        if self.supported.is_empty() {
            return Err(LocaleConfigError::Empty);
        }

        for (i, locale) in self.supported.iter().enumerate() {
            if self.supported[..i].contains(locale) {
                return Err(LocaleConfigError::Duplicate(*locale));
            }
        }

        if !self.is_supported(self.default) {
            return Err(LocaleConfigError::DefaultNotSupported(self.default));
        }

        Ok(())
    }

    pub fn is_supported(&self, locale: Locale) -> bool {
        self.supported.contains(&locale)
    }
}
