//! DN Votes shared library.
//!
//! Everything the serverless functions in `api/` need to serve the live
//! vote counters: store access, counter parsing, and response building.
//! Handlers stay thin and delegate here.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod store;
pub mod votes;

#[cfg(test)]
pub mod test_helpers;

pub use error::{Result, VotesError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
