use atelier_contact::ContactForm;
use atelier_locale::Route;
use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    locale::LocalizedPage,
    routes::{AppState, contact::ContactFormView},
    template::{Page, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: Page,
    pub form: ContactFormView,
}

pub async fn page(page: LocalizedPage, State(app): State<AppState>) -> Response {
    let form = ContactFormView::new(&page.template, &ContactForm::new());

    render(&page.template, &app, form, StatusCode::OK)
}

pub(crate) fn render(
    template: &Template,
    app: &AppState,
    form: ContactFormView,
    status: StatusCode,
) -> Response {
    template.render_with_status(
        status,
        IndexTemplate {
            page: template.page(Route::Home, &app.router),
            form,
        },
    )
}
