use atelier_locale::{Locale, Resolution, Route};
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use crate::{routes::AppState, template::Template};

/// Page resolved from the request path by the locale router.
///
/// Unprefixed known pages are rejected with a temporary redirect to the
/// default locale; anything else that does not resolve gets the 404 page.
#[derive(Clone)]
pub struct LocalizedPage {
    pub route: Route,
    pub template: Template,
}

impl LocalizedPage {
    pub fn locale(&self) -> Locale {
        self.template.locale()
    }
}

impl FromRequestParts<AppState> for LocalizedPage {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.router.resolve(parts.uri.path()) {
            Resolution::Localized { locale, route } => Ok(LocalizedPage {
                route,
                template: state.template(locale),
            }),
            Resolution::Redirect(mut target) => {
                if let Some(query) = parts.uri.query() {
                    target.push('?');
                    target.push_str(query);
                }

                tracing::debug!(from = parts.uri.path(), to = %target, "locale redirect");

                Err(Redirect::temporary(&target).into_response())
            }
            Resolution::NotFound => Err(state.not_found()),
        }
    }
}

/// Supported locale taken from the first path segment, for endpoints that
/// live under `/{locale}/…` but are not pages.
#[derive(Clone)]
pub struct RequestLocale(pub Template);

impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let segment = parts
            .uri
            .path()
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();

        match state.router.locale(segment) {
            Some(locale) => Ok(RequestLocale(state.template(locale))),
            None => Err(state.not_found()),
        }
    }
}
