use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::{Validate, ValidationError, ValidationErrors};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

const REQUIRED: &str = "required";
const INVALID_EMAIL: &str = "invalid_email";

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }

    Ok(())
}

fn email_shape(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    if !EMAIL_PATTERN.is_match(value.trim()) {
        return Err(ValidationError::new(INVALID_EMAIL));
    }

    Ok(())
}

#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub name: String,
    #[validate(custom(function = "email_shape"))]
    #[serde(default)]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Per-field validation against the trimmed values.
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.email.trim().is_empty() || self.message.trim().is_empty()
    }
}

#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    /// Catalog key of the user-facing message.
    pub fn translation_key(&self) -> &'static str {
        match self {
            FieldError::Required => "contact.validation.required",
            FieldError::InvalidEmail => "contact.validation.invalid_email",
        }
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::default();

        for (field, field_errors) in errors.field_errors() {
            let Some(error) = field_errors.first() else {
                continue;
            };

            let error = if error.code == INVALID_EMAIL {
                FieldError::InvalidEmail
            } else {
                FieldError::Required
            };

            let field: &str = &field;
            match field {
                "name" => fields.name = Some(error),
                "email" => fields.email = Some(error),
                "message" => fields.message = Some(error),
                _ => {}
            }
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_message_passes() {
        let message = ContactMessage::new("Ada", "ada@example.com", "Hello");

        assert_eq!(message.check(), Ok(()));
    }

    #[test]
    fn blank_fields_are_required() {
        let message = ContactMessage::new("  ", "", "\n\t");

        assert_eq!(
            message.check(),
            Err(FieldErrors {
                name: Some(FieldError::Required),
                email: Some(FieldError::Required),
                message: Some(FieldError::Required),
            })
        );
    }

    #[test]
    fn email_shape_is_checked_after_trimming() {
        for email in ["not-an-email", "ada@example", "ada @example.com", "@example.com"] {
            let message = ContactMessage::new("Ada", email, "Hello");
            let errors = message.check().unwrap_err();

            assert_eq!(errors.email, Some(FieldError::InvalidEmail), "{email}");
            assert_eq!(errors.name, None);
            assert_eq!(errors.message, None);
        }

        let message = ContactMessage::new("Ada", "  ada@example.com  ", "Hello");
        assert_eq!(message.check(), Ok(()));
    }

    #[test]
    fn trimmed_strips_every_field() {
        let message = ContactMessage::new(" Ada ", " ada@example.com\n", "  Hello  ");

        assert_eq!(
            message.trimmed(),
            ContactMessage::new("Ada", "ada@example.com", "Hello")
        );
    }

    #[test]
    fn clear_removes_single_error() {
        let mut errors = ContactMessage::default().check().unwrap_err();
        errors.clear(Field::Email);

        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        assert!(!errors.is_empty());
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("email".parse::<Field>().ok(), Some(Field::Email));
        assert!("subject".parse::<Field>().is_err());
    }
}
