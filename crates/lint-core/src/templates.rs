//! Auxiliary files bundled into the binary and copied into the project root.

use std::path::{Path, PathBuf};

use crate::constants::ProjectFile;
use crate::error::Result;
use crate::io;

/// A file shipped with the tool and copied verbatim on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// TypeScript project referenced by `parserOptions.project`.
    TsconfigEslint,
    /// Local rule overrides referenced from `extends`.
    Overwrites,
}

impl Template {
    pub fn file(&self) -> ProjectFile {
        match self {
            Self::TsconfigEslint => ProjectFile::TsconfigEslint,
            Self::Overwrites => ProjectFile::Overwrites,
        }
    }

    pub fn contents(&self) -> &'static [u8] {
        match self {
            Self::TsconfigEslint => include_bytes!("../templates/tsconfig.eslint.json"),
            Self::Overwrites => include_bytes!("../templates/overwrites.eslintrc.js"),
        }
    }

    /// Copy into `root`, overwriting an existing file of the same name.
    pub fn copy_to(&self, root: &Path) -> Result<PathBuf> {
        let target = root.join(self.file());
        io::write_atomic(&target, self.contents())?;
        Ok(target)
    }
}
