use std::str::FromStr;

use crate::{Locale, LocaleConfig, LocaleConfigError, Route};

/// Outcome of mapping a request path onto the localized content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Localized { locale: Locale, route: Route },
    /// Path has no locale prefix; the canonical location under the default locale.
    Redirect(String),
    NotFound,
}

#[derive(Debug, Clone)]
pub struct LocaleRouter {
    config: LocaleConfig,
}

impl LocaleRouter {
    pub fn new(config: LocaleConfig) -> Result<Self, LocaleConfigError> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn default_locale(&self) -> Locale {
        self.config.default
    }

    pub fn locales(&self) -> &[Locale] {
        &self.config.supported
    }

    /// Supported locale named by a path segment.
    pub fn locale(&self, segment: &str) -> Option<Locale> {
        Locale::from_str(segment)
            .ok()
            .filter(|locale| self.config.is_supported(*locale))
    }

    /// Maps a request path, tolerating one trailing slash. Empty segments
    /// (`//fi`, `/fi//`) never resolve.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = path.strip_prefix('/').unwrap_or(path);

        if path.is_empty() {
            return Resolution::Redirect(self.canonical_path(self.default_locale(), Route::Home));
        }

        let path = path.strip_suffix('/').unwrap_or(path);

        if path.split('/').any(str::is_empty) {
            return Resolution::NotFound;
        }

        let (first, rest) = match path.split_once('/') {
            Some((first, rest)) => (first, Some(rest)),
            None => (path, None),
        };

        if let Some(locale) = self.locale(first) {
            return match Route::from_segment(rest.unwrap_or_default()) {
                Some(route) => Resolution::Localized { locale, route },
                None => Resolution::NotFound,
            };
        }

        match (Route::from_segment(first), rest) {
            (Some(route), None) if route != Route::Home => {
                Resolution::Redirect(self.canonical_path(self.default_locale(), route))
            }
            _ => Resolution::NotFound,
        }
    }

    pub fn canonical_path(&self, locale: Locale, route: Route) -> String {
        format!("/{}{}", locale.code(), route.path())
    }

    /// Canonical path of `route` in every supported locale, in configured order.
    pub fn alternates(&self, route: Route) -> Vec<(Locale, String)> {
        self.locales()
            .iter()
            .map(|locale| (*locale, self.canonical_path(*locale, route)))
            .collect()
    }
}
