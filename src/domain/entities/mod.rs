pub mod content;
pub mod route;
pub mod session;
