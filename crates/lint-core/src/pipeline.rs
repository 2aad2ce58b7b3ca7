//! End-to-end setup: resolve peers, install, write configuration.
//!
//! Registry queries for all selected configs run concurrently and are joined
//! fail-fast. When one query fails the remaining ones are dropped, which
//! kills their child processes. Installation, the config write and the
//! template copies then run strictly in sequence. An install failure aborts
//! before anything is written; template copy failures are logged and
//! collected but never abort the run.

use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::constants::ProjectFile;
use crate::error::{Error, Result};
use crate::installer::{Installer, PackageManager};
use crate::peers::{ConstraintToken, PeerRequirements, merge_peer_requirements};
use crate::registry::Registry;
use crate::selection::{ConfigSelection, Style};
use crate::synth::{ConfigDocument, templates_for};

/// Flags that shape a setup run.
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Project root everything is installed into and written to.
    pub root: PathBuf,
    pub package_manager: PackageManager,
    pub style: Style,
    pub typescript: bool,
    /// Reference and copy the local overrides file.
    pub overwrites: bool,
    /// Pass `--verbose` to the installer.
    pub verbose: bool,
}

impl SetupOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn selection(&self) -> ConfigSelection {
        ConfigSelection::new(self.style, self.typescript)
    }
}

/// Everything handed to the installer, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// `eslint-config-<name>@latest` for every selected config.
    pub packages: Vec<String>,
    /// Merged peer dependencies.
    pub peers: Vec<ConstraintToken>,
}

impl InstallPlan {
    pub fn new(selection: &ConfigSelection, requirements: &[PeerRequirements]) -> Self {
        Self {
            packages: selection.packages(),
            peers: merge_peer_requirements(requirements),
        }
    }

    /// Config packages followed by peer tokens.
    pub fn dependencies(&self) -> Vec<String> {
        self.packages
            .iter()
            .cloned()
            .chain(self.peers.iter().map(ToString::to_string))
            .collect()
    }
}

/// A template that could not be copied.
#[derive(Debug)]
pub struct CopyFailure {
    pub file: ProjectFile,
    pub error: Error,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct SetupReport {
    pub installed: Vec<String>,
    pub written: Vec<PathBuf>,
    pub copy_failures: Vec<CopyFailure>,
}

impl SetupReport {
    pub fn is_clean(&self) -> bool {
        self.copy_failures.is_empty()
    }
}

/// Receives progress events while a run is in flight.
pub trait Reporter: Send + Sync {
    fn installing(&self, _dependencies: &[String]) {}
    fn creating(&self, _file: ProjectFile) {}
    fn copy_failed(&self, _file: ProjectFile, _error: &Error) {}
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Setup driven by a registry and an installer.
pub struct Pipeline<R, I> {
    registry: R,
    installer: I,
}

impl<R: Registry, I: Installer> Pipeline<R, I> {
    pub fn new(registry: R, installer: I) -> Self {
        Self {
            registry,
            installer,
        }
    }

    /// Query peer requirements for every selected config, in selection order.
    pub async fn resolve_peers(&self, selection: &ConfigSelection) -> Result<Vec<PeerRequirements>> {
        let queries = selection
            .names()
            .iter()
            .map(|name| self.registry.peer_dependencies(name));
        try_join_all(queries).await
    }

    pub async fn run(&self, options: &SetupOptions, reporter: &dyn Reporter) -> Result<SetupReport> {
        let root = options.root.as_path();
        let selection = options.selection();
        info!(configs = ?selection.names(), root = %root.display(), "resolving peer dependencies");

        let requirements = self.resolve_peers(&selection).await?;
        let plan = InstallPlan::new(&selection, &requirements);
        let dependencies = plan.dependencies();

        reporter.installing(&dependencies);
        info!(count = dependencies.len(), manager = ?options.package_manager, "installing");
        self.installer
            .install(root, &dependencies, options.verbose)
            .await?;

        let mut report = SetupReport {
            installed: dependencies,
            ..Default::default()
        };

        reporter.creating(ProjectFile::EslintRc);
        let document = ConfigDocument::synthesize(&selection, options.overwrites);
        report.written.push(document.write(root)?);

        copy_templates(root, &selection, options.overwrites, reporter, &mut report);

        Ok(report)
    }
}

fn copy_templates(
    root: &Path,
    selection: &ConfigSelection,
    overwrites: bool,
    reporter: &dyn Reporter,
    report: &mut SetupReport,
) {
    for template in templates_for(selection, overwrites) {
        let file = template.file();
        reporter.creating(file);
        match template.copy_to(root) {
            Ok(path) => report.written.push(path),
            Err(error) => {
                warn!(file = %file, error = %error, "failed to copy template");
                reporter.copy_failed(file, &error);
                report.copy_failures.push(CopyFailure { file, error });
            }
        }
    }
}
