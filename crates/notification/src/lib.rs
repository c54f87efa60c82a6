mod config;
mod mailgun;
mod provider;

pub use config::*;
pub use mailgun::*;
pub use provider::*;
