use lettre::{Address, message::Mailbox};

use crate::Credentials;

/// Plain-text message in the shape the provider's send endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait::async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(
        &self,
        credentials: &Credentials,
        email: &OutboundEmail,
    ) -> Result<(), ProviderError>;
}

/// Formats `Name <address>`, quoting the name when needed.
pub fn mailbox(name: &str, address: &str) -> Result<String, ProviderError> {
    let email = address
        .parse::<Address>()
        .map_err(|source| ProviderError::Address {
            address: address.to_owned(),
            source,
        })?;

    let name = Some(name.trim().to_owned()).filter(|name| !name.is_empty());

    Ok(Mailbox::new(name, email).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailbox_with_display_name() {
        assert_eq!(
            mailbox("Atelier", "hello@example.test").unwrap(),
            "Atelier <hello@example.test>"
        );
    }

    #[test]
    fn mailbox_without_display_name() {
        assert_eq!(
            mailbox("", "hello@example.test").unwrap(),
            "hello@example.test"
        );
    }

    #[test]
    fn mailbox_rejects_bad_address() {
        let err = mailbox("Atelier", "not an address").unwrap_err();

        assert!(matches!(err, ProviderError::Address { .. }));
    }
}
