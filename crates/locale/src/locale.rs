use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fi,
    En,
}

impl Locale {
    /// Path prefix and `lang` attribute value.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Fi => "fi",
            Locale::En => "en",
        }
    }

    /// Regional tag used for `og:locale`.
    pub fn og_locale(&self) -> &'static str {
        match self {
            Locale::Fi => "fi_FI",
            Locale::En => "en_US",
        }
    }

    /// Name of the language written in the language itself.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Fi => "Suomi",
            Locale::En => "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_lowercase_codes_only() {
        assert_eq!(Locale::from_str("fi").ok(), Some(Locale::Fi));
        assert_eq!(Locale::from_str("en").ok(), Some(Locale::En));
        assert!(Locale::from_str("FI").is_err());
        assert!(Locale::from_str("de").is_err());
    }

    #[test]
    fn display_matches_code() {
        for locale in Locale::VARIANTS {
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn og_locale_is_regional() {
        assert_eq!(Locale::Fi.og_locale(), "fi_FI");
        assert_eq!(Locale::En.og_locale(), "en_US");
    }
}
