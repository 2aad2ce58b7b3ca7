//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use lint_core::{PackageManager, SetupOptions, Style};

/// Install Airbnb ESLint configs with their peer dependencies and write .eslintrc.json
#[derive(Parser, Debug)]
#[command(name = "lint-setup")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "lint-setup [OPTIONS]\n\nUse this in the root of your project")]
pub struct Cli {
    /// Use yarn instead of npm to install required packages
    #[arg(long)]
    pub yarn: bool,

    /// Extend eslint configuration with typescript rules
    #[arg(long)]
    pub ts: bool,

    /// Use base versions of eslint configs (exclude React and JSX rules)
    #[arg(long)]
    pub base: bool,

    /// Add local overwrites that change some airbnb rules
    #[arg(long)]
    pub overwrites: bool,

    /// Print additional logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// npm executable, used for registry queries and npm installs
    #[arg(long, env = "LINT_SETUP_NPM", default_value = "npm", value_name = "PROGRAM")]
    pub npm: String,

    /// yarn executable, used with --yarn
    #[arg(
        long = "yarn-program",
        env = "LINT_SETUP_YARN",
        default_value = "yarn",
        value_name = "PROGRAM"
    )]
    pub yarn_program: String,
}

impl Cli {
    pub fn package_manager(&self) -> PackageManager {
        if self.yarn {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// Program used for the chosen package manager.
    pub fn installer_program(&self) -> &str {
        match self.package_manager() {
            PackageManager::Yarn => &self.yarn_program,
            PackageManager::Npm => &self.npm,
        }
    }

    pub fn setup_options(&self, root: PathBuf) -> SetupOptions {
        SetupOptions {
            root,
            package_manager: self.package_manager(),
            style: if self.base { Style::Base } else { Style::Full },
            typescript: self.ts,
            overwrites: self.overwrites,
            verbose: self.verbose,
        }
    }
}
