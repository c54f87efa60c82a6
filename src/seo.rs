use atelier_locale::{Locale, LocaleRouter, Route, sitemap::X_DEFAULT};

use crate::config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefLang {
    pub hreflang: String,
    pub href: String,
}

/// Head metadata for one page in one locale.
///
/// Every translated string is looked up in the catalog of `locale` only.
#[derive(Debug, Clone)]
pub struct SeoMetadata {
    pub lang: &'static str,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub og_type: &'static str,
    pub og_locale: &'static str,
    pub og_locale_alternates: Vec<&'static str>,
    pub og_site_name: String,
    pub og_image: String,
    pub twitter_card: &'static str,
    pub twitter_site: Option<String>,
    pub alternates: Vec<HrefLang>,
}

pub(crate) fn page_key(route: Route) -> &'static str {
    match route {
        Route::Home => "home",
        Route::Projects => "projects",
    }
}

fn absolute(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }

    format!("{}{}", base_url.trim_end_matches('/'), path)
}

impl SeoMetadata {
    pub fn new(locale: Locale, route: Route, site: &SiteConfig, router: &LocaleRouter) -> Self {
        let code = locale.code();
        let key = page_key(route);

        let page_title = rust_i18n::t!(
            format!("meta.{key}.title"),
            locale = code,
            site = site.name
        );
        let title = match route {
            Route::Home => page_title.to_string(),
            _ => rust_i18n::t!(
                "meta.title_template",
                locale = code,
                title = page_title,
                site = site.name
            )
            .to_string(),
        };

        let mut alternates = router
            .alternates(route)
            .into_iter()
            .map(|(locale, path)| HrefLang {
                hreflang: locale.code().to_owned(),
                href: absolute(&site.base_url, &path),
            })
            .collect::<Vec<_>>();

        alternates.push(HrefLang {
            hreflang: X_DEFAULT.to_owned(),
            href: absolute(
                &site.base_url,
                &router.canonical_path(router.default_locale(), route),
            ),
        });

        Self {
            lang: code,
            title,
            description: rust_i18n::t!(format!("meta.{key}.description"), locale = code)
                .to_string(),
            keywords: rust_i18n::t!("meta.keywords", locale = code).to_string(),
            canonical: absolute(&site.base_url, &router.canonical_path(locale, route)),
            og_type: "website",
            og_locale: locale.og_locale(),
            og_locale_alternates: router
                .locales()
                .iter()
                .filter(|other| **other != locale)
                .map(Locale::og_locale)
                .collect(),
            og_site_name: site.name.to_owned(),
            og_image: absolute(&site.base_url, &site.og_image),
            twitter_card: "summary_large_image",
            twitter_site: site.twitter_handle.to_owned(),
            alternates,
        }
    }
}

#[cfg(test)]
mod tests {
    use atelier_locale::LocaleConfig;

    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://atelier.example/".to_owned(),
            ..Default::default()
        }
    }

    fn router() -> LocaleRouter {
        LocaleRouter::new(LocaleConfig::default()).unwrap()
    }

    #[test]
    fn og_locale_follows_page_locale() {
        let fi = SeoMetadata::new(Locale::Fi, Route::Home, &site(), &router());
        let en = SeoMetadata::new(Locale::En, Route::Home, &site(), &router());

        assert_eq!(fi.og_locale, "fi_FI");
        assert_eq!(fi.og_locale_alternates, vec!["en_US"]);
        assert_eq!(en.og_locale, "en_US");
        assert_eq!(en.lang, "en");
    }

    #[test]
    fn canonical_and_alternates_are_absolute() {
        let seo = SeoMetadata::new(Locale::En, Route::Projects, &site(), &router());

        assert_eq!(seo.canonical, "https://atelier.example/en/projects");
        assert_eq!(
            seo.alternates,
            vec![
                HrefLang {
                    hreflang: "fi".to_owned(),
                    href: "https://atelier.example/fi/projects".to_owned(),
                },
                HrefLang {
                    hreflang: "en".to_owned(),
                    href: "https://atelier.example/en/projects".to_owned(),
                },
                HrefLang {
                    hreflang: "x-default".to_owned(),
                    href: "https://atelier.example/fi/projects".to_owned(),
                },
            ]
        );
        assert_eq!(seo.og_image, "https://atelier.example/static/og-image.svg");
    }

    #[test]
    fn home_title_uses_configured_site_name() {
        let site = SiteConfig {
            name: "Studio Pohjoinen".to_owned(),
            ..site()
        };

        let fi = SeoMetadata::new(Locale::Fi, Route::Home, &site, &router());
        let en = SeoMetadata::new(Locale::En, Route::Home, &site, &router());

        assert_eq!(fi.title, "Studio Pohjoinen | Nettisivut ja web-sovellukset");
        assert_eq!(en.title, "Studio Pohjoinen | Websites and web applications");
        assert!(!en.title.contains("Atelier"));
    }

    #[test]
    fn text_comes_from_the_page_locale_only() {
        let fi = SeoMetadata::new(Locale::Fi, Route::Projects, &site(), &router());
        let en = SeoMetadata::new(Locale::En, Route::Projects, &site(), &router());

        assert_ne!(fi.title, en.title);
        assert_ne!(fi.description, en.description);
        assert!(fi.title.ends_with("| Atelier"));
        assert!(!fi.title.starts_with("meta."));
    }
}
