//! Test utilities for unit and HTTP-level testing.
//!
//! This module provides:
//! - Token factories for minting access tokens with a chosen expiry
//! - Scripted in-memory stand-ins for the remote auth, document and draft APIs
//! - `TestAppStateBuilder` for wiring an `AppState` around those stubs

mod app_state_builder;
mod auth_mocks;
mod content_mocks;
mod factories;

pub use app_state_builder::*;
pub use auth_mocks::*;
pub use content_mocks::*;
pub use factories::*;
