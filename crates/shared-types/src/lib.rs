pub mod document;
pub mod error;
pub mod user;
pub mod view_model;

pub use document::*;
pub use error::*;
pub use user::*;
pub use view_model::*;
