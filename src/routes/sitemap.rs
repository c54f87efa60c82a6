use atelier_locale::{LocaleRouter, sitemap::Sitemap};
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{config::SiteConfig, routes::AppState};

#[derive(askama::Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate<'a> {
    pub sitemap: &'a Sitemap,
}

#[derive(askama::Template)]
#[template(path = "robots.txt")]
pub struct RobotsTemplate<'a> {
    pub sitemap_url: &'a str,
}

/// Serializes the sitemap for `site`; the same inputs always give the same bytes.
pub fn render_sitemap(site: &SiteConfig, router: &LocaleRouter) -> Result<String, askama::Error> {
    let sitemap = Sitemap::build(&site.base_url, router, site.last_modified.as_deref());

    askama::Template::render(&SitemapTemplate { sitemap: &sitemap })
}

pub async fn sitemap(State(app): State<AppState>) -> Response {
    match render_sitemap(&app.config.site, &app.router) {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response(),
        Err(err) => {
            tracing::error!(err = %err, "failed to render sitemap");

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn robots(State(app): State<AppState>) -> Response {
    let sitemap_url = format!("{}/sitemap.xml", app.config.site.base_url.trim_end_matches('/'));

    match askama::Template::render(&RobotsTemplate {
        sitemap_url: &sitemap_url,
    }) {
        Ok(body) => ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response(),
        Err(err) => {
            tracing::error!(err = %err, "failed to render robots.txt");

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
