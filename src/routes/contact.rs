use atelier_contact::{
    ContactForm, ContactMessage, FailureReason, FieldError, FormStatus, SendContactInput,
    SendContactResponse, SubmissionResult,
};
use axum::{
    Json,
    extract::{Form, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    locale::RequestLocale,
    routes::{AppState, index},
    template::{Template, filters},
};

/// Sent by the contact script to get the form fragment instead of a full page.
pub const FRAGMENT_HEADER: &str = "x-fragment";

/// Contact form as rendered: current values, translated errors and status notice.
#[derive(Debug, Clone)]
pub struct ContactFormView {
    pub action: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub message_error: Option<String>,
    pub status: FormStatus,
    pub notice: Option<String>,
}

fn error_text(template: &Template, error: Option<FieldError>) -> Option<String> {
    error.map(|error| {
        rust_i18n::t!(error.translation_key(), locale = template.locale().code()).to_string()
    })
}

impl ContactFormView {
    pub fn new(template: &Template, form: &ContactForm) -> Self {
        let code = template.locale().code();
        let status = form.status();
        let notice = match status {
            FormStatus::Success => Some(rust_i18n::t!("contact.success", locale = code)),
            FormStatus::Error => Some(rust_i18n::t!("contact.error", locale = code)),
            FormStatus::Idle | FormStatus::Sending => None,
        };

        Self {
            action: format!("/{code}/contact"),
            name: form.fields().name.to_owned(),
            email: form.fields().email.to_owned(),
            message: form.fields().message.to_owned(),
            name_error: error_text(template, form.errors().name),
            email_error: error_text(template, form.errors().email),
            message_error: error_text(template, form.errors().message),
            status,
            notice: notice.map(|notice| notice.to_string()),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: ContactFormView,
}

pub async fn action(
    RequestLocale(template): RequestLocale,
    State(app): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<SendContactInput>,
) -> Response {
    let mut form = ContactForm::with_fields(ContactMessage::new(
        input.name.unwrap_or_default(),
        input.email.unwrap_or_default(),
        input.message.unwrap_or_default(),
    ));

    // Each request builds its own form, so it is never in flight here.
    // Double submits are held back by static/js/contact.js.
    let status = match form.submit(&app.contact).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };

    let form = ContactFormView::new(&template, &form);

    if headers.contains_key(FRAGMENT_HEADER) {
        return template.render_with_status(status, ContactFormTemplate { form });
    }

    index::render(&template, &app, form, status)
}

pub async fn api(
    State(app): State<AppState>,
    payload: Result<Json<SendContactInput>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(input)) => app.contact.send(input).await,
        Err(rejection) => {
            tracing::warn!(err = %rejection, "Rejected malformed contact payload");

            SubmissionResult::failure(FailureReason::InvalidInput)
        }
    };

    let status = match result {
        SubmissionResult::Success => StatusCode::OK,
        SubmissionResult::Failure {
            reason: FailureReason::InvalidInput,
        } => StatusCode::BAD_REQUEST,
        SubmissionResult::Failure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(SendContactResponse::from(result))).into_response()
}
