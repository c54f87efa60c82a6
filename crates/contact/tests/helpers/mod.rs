use std::sync::{Arc, Mutex};

use atelier_contact::ContactHandler;
use atelier_notification::{
    Credentials, EmailConfig, EmailProvider, OutboundEmail, ProviderError,
};

#[derive(Default)]
pub struct RecordingProvider {
    pub sent: Mutex<Vec<(Credentials, OutboundEmail)>>,
    pub reject: bool,
}

impl RecordingProvider {
    #[allow(dead_code)]
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn last(&self) -> Option<(Credentials, OutboundEmail)> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(
        &self,
        credentials: &Credentials,
        email: &OutboundEmail,
    ) -> Result<(), ProviderError> {
        self.sent
            .lock()
            .unwrap()
            .push((credentials.clone(), email.clone()));

        if self.reject {
            return Err(ProviderError::Rejected {
                status: 500,
                body: "upstream down".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn configured() -> EmailConfig {
    EmailConfig {
        api_key: Some("key-test".to_owned()),
        domain: Some("mg.example.test".to_owned()),
        contact_name: "Owner".to_owned(),
        contact_address: "owner@example.test".to_owned(),
        ..Default::default()
    }
}

pub fn setup_handler(
    config: EmailConfig,
    provider: RecordingProvider,
) -> (ContactHandler, Arc<RecordingProvider>) {
    let provider = Arc::new(provider);
    let handler = ContactHandler::new(config, provider.clone());

    (handler, provider)
}
