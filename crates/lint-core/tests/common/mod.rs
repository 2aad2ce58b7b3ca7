//! In-process stand-ins for the registry and the installer.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lint_core::{Error, Installer, PeerRequirements, Registry, Result};

pub fn reqs(pairs: &[(&str, &str)]) -> PeerRequirements {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Registry answering from a fixed table.
///
/// Names listed in `failing` exit non-zero; names in `hanging` never answer.
#[derive(Default)]
pub struct FakeRegistry {
    pub peers: BTreeMap<String, PeerRequirements>,
    pub failing: Vec<String>,
    pub hanging: Vec<String>,
    pub queried: Arc<Mutex<Vec<String>>>,
}

impl FakeRegistry {
    pub fn with(mut self, name: &str, peers: PeerRequirements) -> Self {
        self.peers.insert(name.to_string(), peers);
        self
    }

    pub fn failing(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    pub fn hanging(mut self, name: &str) -> Self {
        self.hanging.push(name.to_string());
        self
    }
}

#[async_trait]
impl Registry for FakeRegistry {
    async fn peer_dependencies(&self, config_name: &str) -> Result<PeerRequirements> {
        self.queried.lock().unwrap().push(config_name.to_string());

        if self.hanging.iter().any(|n| n == config_name) {
            std::future::pending::<()>().await;
        }
        if self.failing.iter().any(|n| n == config_name) {
            return Err(Error::ExternalCommand {
                command: format!(
                    "npm info eslint-config-{}@latest peerDependencies --json",
                    config_name
                ),
                exit_code: Some(1),
            });
        }
        Ok(self.peers.get(config_name).cloned().unwrap_or_default())
    }
}

/// Installer recording every call.
#[derive(Default)]
pub struct FakeInstaller {
    pub fail: bool,
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeInstaller {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl Installer for FakeInstaller {
    async fn install(&self, _root: &Path, dependencies: &[String], _verbose: bool) -> Result<()> {
        self.calls.lock().unwrap().push(dependencies.to_vec());
        if self.fail {
            return Err(Error::ExternalCommand {
                command: format!("npm install {}", dependencies.join(" ")),
                exit_code: Some(1),
            });
        }
        Ok(())
    }
}
