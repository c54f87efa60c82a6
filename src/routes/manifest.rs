use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde::Serialize;

use crate::routes::AppState;

pub const CONTENT_TYPE: &str = "application/manifest+json";

#[derive(Serialize, Debug)]
pub struct Icon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Serialize, Debug)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub lang: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<Icon>,
}

impl Manifest {
    pub fn new(app: &AppState) -> Self {
        let site = &app.config.site;
        let locale = app.router.default_locale();

        Self {
            name: site.name.to_owned(),
            short_name: site.short_name.to_owned(),
            description: rust_i18n::t!("meta.home.description", locale = locale.code())
                .to_string(),
            lang: locale.code(),
            start_url: "/",
            display: "standalone",
            background_color: site.palette.background.to_owned(),
            theme_color: site.palette.primary.to_owned(),
            icons: vec![Icon {
                src: "/static/logo.svg",
                sizes: "any",
                kind: "image/svg+xml",
            }],
        }
    }
}

pub async fn manifest(State(app): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, CONTENT_TYPE)],
        Json(Manifest::new(&app)),
    )
}
