//! lint-setup CLI
//!
//! Installs the Airbnb ESLint configs with their peer dependencies and
//! writes `.eslintrc.json` into the project root.

mod cli;
mod error;
mod logging;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use lint_core::{NpmRegistry, PackageManagerInstaller, Pipeline};

use cli::Cli;
use error::{CliError, Result};
use report::ConsoleReporter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let root = resolve_root(cli.root.as_deref())?;
    tracing::debug!(root = %root.display(), "resolved project root");

    let registry = NpmRegistry::new(&root).with_program(cli.npm.clone());
    let installer =
        PackageManagerInstaller::new(cli.package_manager()).with_program(cli.installer_program());
    let pipeline = Pipeline::new(registry, installer);

    let report = pipeline
        .run(&cli.setup_options(root), &ConsoleReporter)
        .await?;
    report::print_summary(&report);
    Ok(())
}

/// Canonical project root, from `--root` or the current directory.
fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(CliError::user(format!(
            "project root {} is not a directory",
            root.display()
        )));
    }
    Ok(dunce::canonicalize(&root)?)
}
