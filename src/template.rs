use std::{collections::HashMap, sync::Arc};

use atelier_locale::{Locale, Route};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{config::Config, seo::SeoMetadata};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let locale = askama::get_value::<String>(values, "locale")?;

        Ok(rust_i18n::t!(value, locale = locale).to_string())
    }
}

/// Link to the current page in another supported locale.
#[derive(Debug, Clone)]
pub struct LocaleLink {
    pub code: &'static str,
    pub label: &'static str,
    pub href: String,
    pub current: bool,
}

/// Everything the shared layout needs, built once per request.
#[derive(Debug, Clone)]
pub struct Page {
    pub seo: SeoMetadata,
    pub site_name: String,
    pub owner: String,
    pub home_href: String,
    pub projects_href: String,
    pub switcher: Vec<LocaleLink>,
    pub palette: crate::config::Palette,
}

#[derive(Clone)]
pub struct Template {
    locale: Locale,
    config: Arc<Config>,
}

impl Template {
    pub fn new(locale: Locale, config: Arc<Config>) -> Self {
        Self { locale, config }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn page(&self, route: Route, router: &atelier_locale::LocaleRouter) -> Page {
        let site = &self.config.site;

        let switcher = router
            .alternates(route)
            .into_iter()
            .map(|(locale, href)| LocaleLink {
                code: locale.code(),
                label: locale.label(),
                href,
                current: locale == self.locale,
            })
            .collect();

        Page {
            seo: SeoMetadata::new(self.locale, route, site, router),
            site_name: site.name.to_owned(),
            owner: site.owner.to_owned(),
            home_href: router.canonical_path(self.locale, Route::Home),
            projects_href: router.canonical_path(self.locale, Route::Projects),
            switcher,
            palette: site.palette.clone(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("locale", Box::new(self.locale.code().to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                self.server_error()
            }
        }
    }

    pub fn server_error(&self) -> Response {
        let html = self
            .render_with_values(ServerTemplate {
                lang: self.locale.code(),
            })
            .unwrap_or_else(|_| SERVER_ERROR_MESSAGE.to_owned());

        (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
    }

    /// Generic 404 page, rendered in the default locale whatever the request path.
    pub fn not_found(&self) -> Response {
        self.render_with_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                lang: self.locale.code(),
                home_href: format!("/{}", self.locale.code()),
            },
        )
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub lang: &'static str,
    pub home_href: String,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub lang: &'static str,
}
