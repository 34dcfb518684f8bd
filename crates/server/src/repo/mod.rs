pub mod document;
pub mod signature;
pub mod user;
