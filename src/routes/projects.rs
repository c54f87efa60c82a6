use axum::{extract::State, response::Response};

use crate::{
    locale::LocalizedPage,
    routes::AppState,
    template::{Page, filters},
};

/// Catalog keys under `projects.items`, in display order.
pub const PROJECTS: [&str; 3] = ["bakery", "booking", "association"];

#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub title: String,
    pub body: String,
}

#[derive(askama::Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub page: Page,
    pub projects: Vec<ProjectCard>,
}

pub async fn page(page: LocalizedPage, State(app): State<AppState>) -> Response {
    let code = page.locale().code();
    let projects = PROJECTS
        .iter()
        .map(|key| ProjectCard {
            title: rust_i18n::t!(format!("projects.items.{key}.title"), locale = code).to_string(),
            body: rust_i18n::t!(format!("projects.items.{key}.body"), locale = code).to_string(),
        })
        .collect();

    page.template.render(ProjectsTemplate {
        page: page.template.page(page.route, &app.router),
        projects,
    })
}
