pub mod assets;
pub mod config;
pub mod locale;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod seo;
pub mod server;
pub mod template;

rust_i18n::i18n!("locales", fallback = "en");

pub use config::Config;
pub use routes::AppState;
