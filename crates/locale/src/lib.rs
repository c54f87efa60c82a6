mod config;
mod locale;
mod route;
mod router;
pub mod sitemap;

pub use config::*;
pub use locale::*;
pub use route::*;
pub use router::*;
