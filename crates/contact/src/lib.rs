mod form;
mod handler;
mod message;
mod result;

pub use form::*;
pub use handler::*;
pub use message::*;
pub use result::*;
