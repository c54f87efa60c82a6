//! Shared setup for router-level tests: an app wired to an in-process
//! provider that records every message instead of calling the network.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use atelier::{
    AppState, Config,
    config::{ObservabilityConfig, ServerConfig, SiteConfig},
};
use atelier_locale::LocaleConfig;
use atelier_notification::{
    Credentials, EmailConfig, EmailProvider, OutboundEmail, ProviderError,
};
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[derive(Default)]
pub struct RecordingProvider {
    pub sent: Mutex<Vec<(Credentials, OutboundEmail)>>,
    pub reject: bool,
}

impl RecordingProvider {
    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().map(|(_, email)| email.clone())
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
                status: 502,
                body: "bad gateway".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            base_url: "https://atelier.test".to_string(),
            last_modified: Some("2026-01-15".to_string()),
            ..Default::default()
        },
        locales: LocaleConfig::default(),
        email: EmailConfig {
            api_key: Some("key-test".to_string()),
            domain: Some("mg.atelier.test".to_string()),
            contact_name: "Owner".to_string(),
            contact_address: "owner@atelier.test".to_string(),
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<RecordingProvider>,
}

pub fn setup_app(config: Config, provider: RecordingProvider) -> TestApp {
    let provider = Arc::new(provider);
    let state = AppState::with_provider(config, provider.clone()).unwrap();

    TestApp {
        router: atelier::server::app(state),
        provider,
    }
}

pub fn default_app() -> TestApp {
    setup_app(test_config(), RecordingProvider::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_form(
    router: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    fragment: bool,
) -> TestResponse {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if fragment {
        request = request.header("x-fragment", "true");
    }

    let body = serde_urlencoded::to_string(fields).unwrap();

    send(router, request.body(Body::from(body)).unwrap()).await
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> TestResponse {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap(),
    )
    .await
}
