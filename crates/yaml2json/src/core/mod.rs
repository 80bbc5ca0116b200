//! Shared building blocks for the conversion pipeline
//!
//! Error types, run settings and logging setup used by every stage.

mod config;
mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;
