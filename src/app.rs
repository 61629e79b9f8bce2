// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use self::cli::{Cli, Command};
use self::config::{load_exclusions, write_default_config};
use self::formatter::print_stats;
use self::scanner::build_stats;

/// Parses arguments, sets up logging and dispatches the subcommand.
pub fn run() -> Result<ExitCode> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config_path = current_dir.join(&args.config);

    match args.command {
        Command::Scan { path } => {
            let stdout = io::stdout();
            scan(&current_dir, &config_path, &path, &mut stdout.lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Init { yes } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let created = init(&config_path, yes, &mut stdin.lock(), &mut stdout.lock())?;
            Ok(if created {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Loads exclusions, scans `target` and prints the tree labelled with `target` as given.
pub fn scan<W: Write>(
    current_dir: &Path,
    config_path: &Path,
    target: &Path,
    out: &mut W,
) -> Result<()> {
    let exclusions = load_exclusions(config_path)?;
    log::debug!(
        "Loaded {} folder and {} file exclusions from {}",
        exclusions.folders.len(),
        exclusions.files.len(),
        config_path.display()
    );

    let root = current_dir.join(target);
    let stats = build_stats(&root, &exclusions.folders, &exclusions.files)?;

    print_stats(&stats, &target.display().to_string(), out).context("Failed to write output")?;
    Ok(())
}

/// Writes the default config, asking before replacing an existing one.
/// Returns `false` when the user declines.
pub fn init<R: BufRead, W: Write>(
    config_path: &Path,
    yes: bool,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    if config_path.exists() && !yes {
        write!(out, "{} already exists. Overwrite? [y/N]: ", config_path.display())?;
        out.flush()?;

        let mut answer = String::new();
        input
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;

        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            writeln!(out)?;
            writeln!(out, "Aborting.")?;
            return Ok(false);
        }
    }

    write_default_config(config_path)?;
    writeln!(out, "{} has been created.", config_path.display())?;
    Ok(true)
}
