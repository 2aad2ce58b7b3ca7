//! Registry queries for config package peer dependencies.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::debug;

use crate::constants::config_package;
use crate::error::{Error, Result};
use crate::peers::PeerRequirements;
use crate::process::CommandLine;

/// Source of peer dependency metadata for config packages.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Peer dependencies of the latest `eslint-config-<config_name>` release.
    async fn peer_dependencies(&self, config_name: &str) -> Result<PeerRequirements>;
}

/// Queries the npm registry through `npm info`.
#[derive(Debug, Clone)]
pub struct NpmRegistry {
    program: String,
    root: PathBuf,
}

impl NpmRegistry {
    /// Query with `npm` from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            program: "npm".to_string(),
            root: root.into(),
        }
    }

    /// Use a different npm executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// `npm info eslint-config-<name>@latest peerDependencies --json`
    pub fn query_command(&self, config_name: &str) -> CommandLine {
        CommandLine::new(
            self.program.clone(),
            vec![
                "info".to_string(),
                config_package(config_name),
                "peerDependencies".to_string(),
                "--json".to_string(),
            ],
        )
    }
}

#[async_trait]
impl Registry for NpmRegistry {
    async fn peer_dependencies(&self, config_name: &str) -> Result<PeerRequirements> {
        let line = self.query_command(config_name);
        debug!(command = %line, "querying registry");

        let output = line
            .to_command()
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| line.spawn_error(e))?;

        line.check_status(output.status)?;
        parse_peer_dependencies(&line, &output.stdout)
    }
}

/// Parse `--json` output into peer requirements.
///
/// The document must be an object of string ranges. Empty output is an
/// error, not an empty set.
pub fn parse_peer_dependencies(command: &CommandLine, stdout: &[u8]) -> Result<PeerRequirements> {
    serde_json::from_slice(stdout).map_err(|source| Error::Parse {
        command: command.to_string(),
        source,
    })
}
