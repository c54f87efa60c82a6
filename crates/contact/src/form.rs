use std::time::Duration;

use strum::{Display, EnumString};
use tokio::time::Instant;

use crate::{ContactHandler, ContactMessage, Field, FieldErrors, SubmissionResult};

/// How long a settled status stays visible before the form returns to idle.
pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(EnumString, Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("one or more fields are invalid")]
    Invalid(FieldErrors),
}

#[async_trait::async_trait]
pub trait ContactSender: Send + Sync {
    async fn send_contact(&self, message: &ContactMessage) -> SubmissionResult;
}

#[async_trait::async_trait]
impl ContactSender for ContactHandler {
    async fn send_contact(&self, message: &ContactMessage) -> SubmissionResult {
        self.send_message(message).await
    }
}

/// Client-side lifecycle of the contact form: field values, per-field errors
/// and the submission status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactMessage,
    errors: FieldErrors,
    status: FormStatus,
    settled_at: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactMessage) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    /// Editing a field clears that field's error only.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }

        self.errors.clear(field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status_at(Instant::now())
    }

    pub fn status_at(&self, now: Instant) -> FormStatus {
        match (self.status, self.settled_at) {
            (FormStatus::Success | FormStatus::Error, Some(settled_at))
                if now.saturating_duration_since(settled_at) >= STATUS_RESET_DELAY =>
            {
                FormStatus::Idle
            }
            (status, _) => status,
        }
    }

    /// Validates and moves to `Sending`, returning the trimmed message to deliver.
    pub fn begin(&mut self, now: Instant) -> Result<ContactMessage, SubmitError> {
        if self.status_at(now) == FormStatus::Sending {
            return Err(SubmitError::InFlight);
        }

        if let Err(errors) = self.fields.check() {
            self.errors = errors.clone();
            self.status = FormStatus::Idle;
            self.settled_at = None;

            return Err(SubmitError::Invalid(errors));
        }

        self.errors = FieldErrors::default();
        self.status = FormStatus::Sending;
        self.settled_at = None;

        Ok(self.fields.trimmed())
    }

    pub fn complete(&mut self, result: &SubmissionResult, now: Instant) -> FormStatus {
        self.status = if result.is_success() {
            self.fields = ContactMessage::default();
            FormStatus::Success
        } else {
            FormStatus::Error
        };
        self.settled_at = Some(now);

        self.status
    }

    pub async fn submit<S: ContactSender + ?Sized>(
        &mut self,
        sender: &S,
    ) -> Result<FormStatus, SubmitError> {
        let message = self.begin(Instant::now())?;
        let result = sender.send_contact(&message).await;

        Ok(self.complete(&result, Instant::now()))
    }
}
