#[cfg(feature = "server")]
pub(crate) mod auth;

mod document;
pub use document::*;

mod session;
pub use session::*;
