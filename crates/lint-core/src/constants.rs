//! Package names and project file markers.

use std::path::Path;

/// Prefix joined with a configuration name to form an installable package.
pub const CONFIG_PACKAGE_PREFIX: &str = "eslint-config";

/// Peer dependency that is never installed from the peer list.
///
/// The lint package itself arrives as a peer of every Airbnb config and is
/// managed as a primary dependency instead.
pub const SENTINEL_PACKAGE: &str = "eslint";

/// Separator between alternative ranges in a constraint string.
pub const DISJUNCTION_DELIMITER: &str = "||";

/// Full Airbnb style (React and JSX rules included).
pub const FULL_STYLE: &str = "airbnb";

/// Reduced Airbnb style without React and JSX rules.
pub const BASE_STYLE: &str = "airbnb-base";

/// TypeScript addition to either style.
pub const TYPESCRIPT_CONFIG: &str = "airbnb-typescript";

/// Names that have a dedicated entry point under the base style.
pub const BASE_ALIASES: &[(&str, &str)] = &[(TYPESCRIPT_CONFIG, "airbnb-typescript/base")];

/// Files written into the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFile {
    /// `.eslintrc.json`, the synthesized configuration
    EslintRc,
    /// `tsconfig.eslint.json`, the TypeScript project used by the parser
    TsconfigEslint,
    /// `.overwrites.eslintrc.js`, local rule overrides
    Overwrites,
}

impl ProjectFile {
    /// File name relative to the project root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EslintRc => ".eslintrc.json",
            Self::TsconfigEslint => "tsconfig.eslint.json",
            Self::Overwrites => ".overwrites.eslintrc.js",
        }
    }

    /// Reference to the file as written inside `.eslintrc.json`.
    pub fn relative_reference(&self) -> String {
        format!("./{}", self.as_str())
    }
}

impl AsRef<Path> for ProjectFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installable package reference for a configuration name, pinned to `latest`.
pub fn config_package(name: &str) -> String {
    format!("{}-{}@latest", CONFIG_PACKAGE_PREFIX, name)
}
