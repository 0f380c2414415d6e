//! Library exports for e2e-options-cli.
//!
//! This module exports the CLI structure so that it can be inspected from
//! tests and documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
