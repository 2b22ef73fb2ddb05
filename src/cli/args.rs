//! CLI argument definitions using clap
//!
//! The tool is menu-driven; the command line only carries startup options.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Interactive organizer for grassroots resistance networks
#[derive(Parser, Debug)]
#[command(name = "resist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Data file to load before the menu is shown
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub load: Option<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,
}
