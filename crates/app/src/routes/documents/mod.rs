pub mod detail;
pub mod list;
pub mod sign_section;
pub mod signature_timeline;
pub mod status_badge;
