//! Command-line entry points.

mod args;
pub mod sync;

pub use args::Cli;
