pub mod http;
pub mod remote_api;
pub mod remote_auth;
