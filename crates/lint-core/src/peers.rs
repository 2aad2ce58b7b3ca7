//! Peer dependency merging.
//!
//! Each selected config declares its own peer dependencies. They are merged
//! into one install list where a later config's range wins for a package
//! declared by more than one config.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::constants::SENTINEL_PACKAGE;
use crate::constraint::select_constraint;

/// Peer dependencies declared by one config package: package name to raw range.
pub type PeerRequirements = BTreeMap<String, String>;

/// A `name@version` install token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintToken {
    pub name: String,
    pub version: String,
}

impl ConstraintToken {
    /// Build a token from a raw range, keeping only its first alternative.
    pub fn from_raw(name: impl Into<String>, raw: &str) -> Self {
        Self {
            name: name.into(),
            version: select_constraint(raw).to_string(),
        }
    }
}

impl fmt::Display for ConstraintToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Shallow-merge peer requirements in order and turn them into install tokens.
///
/// The sentinel package is dropped no matter how many inputs declare it.
pub fn merge_peer_requirements<'a, I>(requirements: I) -> Vec<ConstraintToken>
where
    I: IntoIterator<Item = &'a PeerRequirements>,
{
    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
    for requirement in requirements {
        for (name, range) in requirement {
            if let Some(previous) = merged.insert(name.as_str(), range.as_str()) {
                debug!(package = %name, %previous, %range, "peer range overridden by later config");
            }
        }
    }

    merged
        .into_iter()
        .filter(|(name, _)| *name != SENTINEL_PACKAGE)
        .map(|(name, range)| ConstraintToken::from_raw(name, range))
        .collect()
}
