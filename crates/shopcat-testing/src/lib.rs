//! Testing infrastructure for shopcat integration tests.
//!
//! - `TestWorld`: isolated data directory, unreachable product API, fallback
//!   snapshot placement and CLI execution
//! - `fixtures`: sample catalogs
//! - `assertions`: checks over the JSON output of `--format json`

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
