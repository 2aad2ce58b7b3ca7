//! Package installation through npm or Yarn.
//!
//! The installer runs with inherited stdio so its progress output is
//! streamed live to the terminal. A non-zero exit is reported as
//! [`Error::ExternalCommand`] carrying the full command line. There is no
//! retry and no rollback of a partial install.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::process::CommandLine;

/// Package manager used for installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Executable name looked up on PATH.
    pub fn default_program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }
}

/// Installs dev dependencies into a project root.
#[async_trait]
pub trait Installer: Send + Sync {
    async fn install(&self, root: &Path, dependencies: &[String], verbose: bool) -> Result<()>;
}

/// Spawns the real package manager.
#[derive(Debug, Clone)]
pub struct PackageManagerInstaller {
    manager: PackageManager,
    program: String,
}

impl PackageManagerInstaller {
    pub fn new(manager: PackageManager) -> Self {
        Self {
            manager,
            program: manager.default_program().to_string(),
        }
    }

    /// Use a different executable for the chosen package manager.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Build the install command line.
    ///
    /// - Yarn: `yarn add --exact -D <deps> --cwd <root>`
    /// - npm: `npm install --no-audit --save-dev --save-exact --loglevel error <deps>`
    ///
    /// `--verbose` is appended last when requested.
    pub fn install_command(&self, root: &Path, dependencies: &[String], verbose: bool) -> CommandLine {
        let mut args: Vec<String> = Vec::with_capacity(dependencies.len() + 8);
        match self.manager {
            PackageManager::Yarn => {
                args.extend(["add", "--exact", "-D"].map(String::from));
                args.extend(dependencies.iter().cloned());
                args.push("--cwd".to_string());
                args.push(root.to_string_lossy().into_owned());
            }
            PackageManager::Npm => {
                args.extend(
                    [
                        "install",
                        "--no-audit",
                        "--save-dev",
                        "--save-exact",
                        "--loglevel",
                        "error",
                    ]
                    .map(String::from),
                );
                args.extend(dependencies.iter().cloned());
            }
        }
        if verbose {
            args.push("--verbose".to_string());
        }
        CommandLine::new(self.program.clone(), args)
    }
}

#[async_trait]
impl Installer for PackageManagerInstaller {
    async fn install(&self, root: &Path, dependencies: &[String], verbose: bool) -> Result<()> {
        let line = self.install_command(root, dependencies, verbose);
        debug!(command = %line, "running installer");

        let status = line
            .to_command()
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| line.spawn_error(e))?;

        line.check_status(status)
    }
}
