//! `.eslintrc.json` synthesis.
//!
//! The document is built from the selection alone; an existing file is
//! replaced, never merged.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::constants::ProjectFile;
use crate::error::Result;
use crate::io;
use crate::selection::ConfigSelection;
use crate::templates::Template;

/// Parser options emitted for TypeScript projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserOptions {
    pub project: String,
}

/// Contents of `.eslintrc.json`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub extends: Vec<String>,
    pub rules: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<ParserOptions>,
}

impl ConfigDocument {
    /// Build the document for a selection.
    ///
    /// `overwrites` appends a reference to the local overrides file after the
    /// configs. TypeScript selections get `parserOptions.project`.
    pub fn synthesize(selection: &ConfigSelection, overwrites: bool) -> Self {
        let mut extends = selection.extends_names();
        if overwrites {
            extends.push(ProjectFile::Overwrites.relative_reference());
        }

        let parser_options = selection.has_typescript().then(|| ParserOptions {
            project: ProjectFile::TsconfigEslint.relative_reference(),
        });

        Self {
            extends,
            rules: BTreeMap::new(),
            parser_options,
        }
    }

    /// Serialize with four-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write `.eslintrc.json` into `root`.
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let path = root.join(ProjectFile::EslintRc);
        io::write_text(&path, &self.to_json()?)?;
        Ok(path)
    }
}

/// Templates to copy for a run, in copy order.
pub fn templates_for(selection: &ConfigSelection, overwrites: bool) -> Vec<Template> {
    let mut templates = Vec::new();
    if selection.has_typescript() {
        templates.push(Template::TsconfigEslint);
    }
    if overwrites {
        templates.push(Template::Overwrites);
    }
    templates
}
