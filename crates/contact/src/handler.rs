use std::sync::Arc;

use atelier_notification::{
    Credentials, EmailConfig, EmailProvider, OutboundEmail, ProviderError, mailbox,
};
use serde::Deserialize;

use crate::{ContactMessage, FailureReason, SubmissionResult};

/// Untyped submission as received from a caller; any field may be absent.
#[derive(Deserialize, Default, Clone, Debug)]
pub struct SendContactInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SendContactInput {
    pub fn into_message(self) -> Option<ContactMessage> {
        let message = ContactMessage {
            name: self.name?,
            email: self.email?,
            message: self.message?,
        };

        (!message.is_blank()).then_some(message)
    }
}

impl From<ContactMessage> for SendContactInput {
    fn from(message: ContactMessage) -> Self {
        Self {
            name: Some(message.name),
            email: Some(message.email),
            message: Some(message.message),
        }
    }
}

/// Relays contact messages to the site owner through the email provider.
#[derive(Clone)]
pub struct ContactHandler {
    config: Arc<EmailConfig>,
    provider: Arc<dyn EmailProvider>,
}

impl ContactHandler {
    pub fn new(config: EmailConfig, provider: Arc<dyn EmailProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    pub async fn send(&self, input: SendContactInput) -> SubmissionResult {
        match input.into_message() {
            Some(message) => self.send_message(&message.trimmed()).await,
            None => {
                tracing::warn!("Rejected contact submission with missing fields");

                SubmissionResult::failure(FailureReason::InvalidInput)
            }
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn send_message(&self, message: &ContactMessage) -> SubmissionResult {
        if message.is_blank() {
            tracing::warn!("Rejected contact submission with blank fields");

            return SubmissionResult::failure(FailureReason::InvalidInput);
        }

        let Some(credentials) = self.config.credentials() else {
            tracing::error!(
                api_key_set = self.config.api_key.is_some(),
                domain_set = self.config.domain.is_some(),
                "Email provider is not configured, contact message dropped"
            );

            return SubmissionResult::failure(FailureReason::NotConfigured);
        };

        let email = match compose(&self.config, &credentials, message) {
            Ok(email) => email,
            Err(err) => {
                tracing::error!(error = %err, "Failed to compose contact email");

                return SubmissionResult::failure(FailureReason::SendFailed);
            }
        };

        match self.provider.send(&credentials, &email).await {
            Ok(()) => {
                tracing::info!("Contact message sent");

                SubmissionResult::Success
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to send contact message");

                SubmissionResult::failure(FailureReason::SendFailed)
            }
        }
    }
}

/// Builds the fixed-format notification sent to the site owner.
pub fn compose(
    config: &EmailConfig,
    credentials: &Credentials,
    message: &ContactMessage,
) -> Result<OutboundEmail, ProviderError> {
    let from = mailbox(
        &config.from_name,
        &format!("{}@{}", config.from_local, credentials.domain),
    )?;
    let to = mailbox(&config.contact_name, &config.contact_address)?;

    let text = [
        format!("Name: {}", message.name),
        format!("Email: {}", message.email),
        String::new(),
        "Message:".to_owned(),
        message.message.to_owned(),
    ]
    .join("\n");

    Ok(OutboundEmail {
        from,
        to: vec![to],
        subject: format!("{}: {}", config.subject_prefix, message.name),
        text,
    })
}
