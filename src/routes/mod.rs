use std::sync::Arc;

use atelier_contact::ContactHandler;
use atelier_locale::{Locale, LocaleRouter, Route};
use atelier_notification::{EmailProvider, MailgunProvider};
use axum::{
    Router,
    extract::State,
    http::Method,
    response::Response,
    routing::{get, post},
};

use crate::{config::Config, locale::LocalizedPage, template::Template};

mod contact;
mod health;
mod index;
mod manifest;
mod projects;
mod sitemap;

pub use sitemap::render_sitemap;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub router: Arc<LocaleRouter>,
    pub contact: ContactHandler,
}

impl AppState {
    /// State wired to the Mailgun adapter described by `config.email`.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let provider = MailgunProvider::from_config(&config.email)?;

        Self::with_provider(config, Arc::new(provider))
    }

    pub fn with_provider(config: Config, provider: Arc<dyn EmailProvider>) -> anyhow::Result<Self> {
        let router = LocaleRouter::new(config.locales.clone())?;
        let contact = ContactHandler::new(config.email.clone(), provider);

        Ok(Self {
            config: Arc::new(config),
            router: Arc::new(router),
            contact,
        })
    }

    pub fn template(&self, locale: Locale) -> Template {
        Template::new(locale, self.config.clone())
    }

    pub fn not_found(&self) -> Response {
        self.template(self.router.default_locale()).not_found()
    }
}

/// Everything the explicit routes do not match goes through the locale router.
pub async fn fallback(
    method: Method,
    State(app): State<AppState>,
    page: Result<LocalizedPage, Response>,
) -> Response {
    if !matches!(method, Method::GET | Method::HEAD) {
        return app.not_found();
    }

    let page = match page {
        Ok(page) => page,
        Err(rejection) => return rejection,
    };

    match page.route {
        Route::Home => index::page(page, State(app)).await,
        Route::Projects => projects::page(page, State(app)).await,
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/robots.txt", get(sitemap::robots))
        .route("/manifest.webmanifest", get(manifest::manifest))
        .route("/api/contact", post(contact::api))
        .route("/{locale}", get(index::page))
        .route("/{locale}/projects", get(projects::page))
        .route("/{locale}/contact", post(contact::action))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
