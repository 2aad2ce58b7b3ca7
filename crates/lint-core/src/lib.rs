//! Core of lint-setup
//!
//! Resolves the peer dependencies of the Airbnb ESLint config packages,
//! installs them through npm or Yarn, and writes `.eslintrc.json` together
//! with optional auxiliary templates.

pub mod constants;
pub mod constraint;
pub mod error;
pub mod installer;
pub mod io;
pub mod peers;
pub mod pipeline;
pub mod process;
pub mod registry;
pub mod selection;
pub mod synth;
pub mod templates;

pub use constants::ProjectFile;
pub use constraint::select_constraint;
pub use error::{Error, Result};
pub use installer::{Installer, PackageManager, PackageManagerInstaller};
pub use peers::{ConstraintToken, PeerRequirements, merge_peer_requirements};
pub use pipeline::{
    CopyFailure, InstallPlan, Pipeline, Reporter, SetupOptions, SetupReport, SilentReporter,
};
pub use registry::{NpmRegistry, Registry};
pub use selection::{ConfigSelection, Style};
pub use synth::ConfigDocument;
pub use templates::Template;
