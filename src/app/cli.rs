use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::config::DEFAULT_CONFIG_NAME;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scan a directory tree and report file and line counts"
)]
pub struct Cli {
    /// Exclusion config to read or create
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_NAME)]
    pub config: PathBuf,

    /// Log skipped entries and other details
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Directory to scan in a tree view, with file-count/line-count stats
    Scan {
        /// Directory to scan in a tree view, showing file-count/line-count stats
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a default exclusion config to the current directory
    Init {
        /// Overwrite an existing config without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
