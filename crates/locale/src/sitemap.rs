//! Sitemap entries for every supported locale and known route.
//!
//! Output depends only on the base URL, the locale configuration and the
//! optional fixed `lastmod` date, so rebuilding it yields the same entries in
//! the same order.

use strum::VariantArray;

use crate::{LocaleRouter, Route};

pub const X_DEFAULT: &str = "x-default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub alternates: Vec<Alternate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitemap {
    pub entries: Vec<Entry>,
}

impl Sitemap {
    pub fn build(base_url: &str, router: &LocaleRouter, lastmod: Option<&str>) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let lastmod = lastmod.map(str::to_owned);

        let mut entries = vec![Entry {
            loc: base_url.to_owned(),
            lastmod: lastmod.clone(),
            alternates: vec![],
        }];

        for route in Route::VARIANTS {
            let mut alternates = router
                .alternates(*route)
                .into_iter()
                .map(|(locale, path)| Alternate {
                    hreflang: locale.code().to_owned(),
                    href: format!("{base_url}{path}"),
                })
                .collect::<Vec<_>>();

            alternates.push(Alternate {
                hreflang: X_DEFAULT.to_owned(),
                href: format!(
                    "{base_url}{}",
                    router.canonical_path(router.default_locale(), *route)
                ),
            });

            for locale in router.locales() {
                entries.push(Entry {
                    loc: format!("{base_url}{}", router.canonical_path(*locale, *route)),
                    lastmod: lastmod.clone(),
                    alternates: alternates.clone(),
                });
            }
        }

        Self { entries }
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.loc.as_str())
    }
}
