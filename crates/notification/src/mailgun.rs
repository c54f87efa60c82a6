//! Mailgun messages API adapter using reqwest

use std::time::Duration;

use crate::{Credentials, EmailConfig, EmailProvider, OutboundEmail, ProviderError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends messages through `POST {endpoint}/v3/{domain}/messages`
#[derive(Clone)]
pub struct MailgunProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl MailgunProvider {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("atelier/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_owned(),
        })
    }

    pub fn from_config(config: &EmailConfig) -> Result<Self, ProviderError> {
        tracing::info!(
            endpoint = %config.endpoint(),
            region = %config.region,
            configured = config.credentials().is_some(),
            "Email provider initialized"
        );

        Self::new(config.endpoint())
    }

    pub fn messages_url(&self, domain: &str) -> String {
        format!("{}/v3/{}/messages", self.endpoint, domain)
    }
}

#[async_trait::async_trait]
impl EmailProvider for MailgunProvider {
    #[tracing::instrument(skip_all, fields(domain = %credentials.domain, subject = %email.subject))]
    async fn send(
        &self,
        credentials: &Credentials,
        email: &OutboundEmail,
    ) -> Result<(), ProviderError> {
        let mut form = vec![("from", email.from.as_str())];
        form.extend(email.to.iter().map(|to| ("to", to.as_str())));
        form.push(("subject", email.subject.as_str()));
        form.push(("text", email.text.as_str()));

        let response = self
            .client
            .post(self.messages_url(&credentials.domain))
            .basic_auth("api", Some(&credentials.api_key))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(status = status.as_u16(), "Message accepted by provider");

        Ok(())
    }
}
