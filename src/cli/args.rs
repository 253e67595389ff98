//! Command-line interface definitions.
//!
//! The synchronizer itself takes no options: which files it touches and
//! which addresses it writes are fixed by the docs tree and the published
//! manifest, so the surface is just output control.

use clap::{ColorChoice, Parser};

/// Addrsync documentation maintenance CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
