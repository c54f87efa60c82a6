use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const HOURLY: &str = "public, max-age=3600";
const NO_STORE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    Immutable,
    Hourly,
    NoStore,
}

impl CachePolicy {
    pub fn for_path(path: &str) -> Self {
        match path {
            p if p.starts_with("/static/") => CachePolicy::Immutable,
            "/robots.txt" | "/sitemap.xml" | "/manifest.webmanifest" => CachePolicy::Hourly,
            _ => CachePolicy::NoStore,
        }
    }
}

/// Middleware to set cache control headers
/// - Embedded assets: cached for a year
/// - Crawler and manifest files: cached for an hour
/// - Pages and API responses: never cached
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let policy = CachePolicy::for_path(req.uri().path());
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    match policy {
        CachePolicy::Immutable => {
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(IMMUTABLE));
        }
        CachePolicy::Hourly => {
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(HOURLY));
        }
        CachePolicy::NoStore => {
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
            headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
            headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
        }
    }

    response
}
