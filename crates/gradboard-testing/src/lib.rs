//! Testing infrastructure for gradboard integration tests.
//!
//! - `MockApi`: axum server on an ephemeral port with canned responses per route
//! - `TestWorld`: isolated config directory for CLI runs
//! - `fixtures`: school, announcement and chart payloads
//! - `assertions`: checks against the CLI's JSON view-models

pub mod assertions;
pub mod fixtures;
pub mod mock_api;
pub mod world;

pub use mock_api::{BackgroundMockApi, MockApi, MockApiBuilder};
pub use world::TestWorld;
