pub mod cookies;
pub mod middleware;
pub mod session;
