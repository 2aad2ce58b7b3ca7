//! Helpers shared by everything that spawns a package manager.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use tokio::process::Command;

use crate::error::Error;

/// A program plus its arguments, kept around for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build the tokio command. Children are killed if the handle is dropped.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(resolve_program(&self.program));
        cmd.args(&self.args).kill_on_drop(true);
        cmd
    }

    /// Map a finished process status to `Ok` or [`Error::ExternalCommand`].
    pub fn check_status(&self, status: ExitStatus) -> Result<(), Error> {
        if status.success() {
            Ok(())
        } else {
            Err(Error::ExternalCommand {
                command: self.to_string(),
                exit_code: status.code(),
            })
        }
    }

    /// Map a spawn failure. A missing program gets an install hint.
    pub fn spawn_error(&self, err: std::io::Error) -> Error {
        if err.kind() == ErrorKind::NotFound {
            Error::PackageManagerNotFound {
                tool: self.program.clone(),
                hint: install_hint(&self.program).map(str::to_string),
            }
        } else {
            Error::io(&self.program, err)
        }
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Resolve a program name the way a Windows shell would.
///
/// `npm` and `yarn` ship as `npm.cmd` / `yarn.cmd` there, which a plain spawn
/// does not find. Names that already carry an extension, and every name on
/// other platforms, are returned unchanged.
pub fn resolve_program(program: &str) -> PathBuf {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    find_with_extensions(program, &path_var, &executable_extensions())
        .unwrap_or_else(|| PathBuf::from(program))
}

fn executable_extensions() -> Vec<String> {
    if cfg!(windows) {
        std::env::var("PATHEXT")
            .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| ext.to_ascii_lowercase())
            .collect()
    } else {
        Vec::new()
    }
}

fn find_with_extensions(program: &str, path_var: &OsStr, extensions: &[String]) -> Option<PathBuf> {
    let program_path = Path::new(program);
    if extensions.is_empty() || program_path.extension().is_some() {
        return None;
    }

    // Explicit paths are only completed, never searched for.
    if program_path.components().count() > 1 {
        return with_extensions(program_path.to_path_buf(), extensions)
            .find(|candidate| candidate.is_file());
    }

    std::env::split_paths(path_var)
        .flat_map(|dir| with_extensions(dir.join(program), extensions))
        .find(|candidate| candidate.is_file())
}

fn with_extensions(base: PathBuf, extensions: &[String]) -> impl Iterator<Item = PathBuf> + '_ {
    extensions.iter().map(move |ext| {
        let mut name = base.clone().into_os_string();
        name.push(ext);
        PathBuf::from(name)
    })
}

fn install_hint(program: &str) -> Option<&'static str> {
    let tool = Path::new(program)
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(program);
    match tool {
        "npm" => Some("\n  Install: https://nodejs.org"),
        "yarn" => Some("\n  Install: npm install --global yarn"),
        _ => None,
    }
}
