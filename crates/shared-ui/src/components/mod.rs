pub mod badge;
pub mod button;
pub mod card;
pub mod page_header;
pub mod skeleton;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use page_header::*;
pub use skeleton::*;
