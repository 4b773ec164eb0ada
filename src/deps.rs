//! Dependency descriptors and source verification.

use crate::config::{ExternalConfig, ForgeConfig};
use crate::error::ForgeError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// One buildable unit: a vendored third-party library, or a first-party
/// component folded into the list after its own install succeeds.
#[derive(Debug, Clone)]
pub struct Dependency {
    pub name: String,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub prefix_dir: PathBuf,
    pub options: Vec<String>,
}

impl Dependency {
    /// Descriptor for a vendored dependency, dirs derived as `<root>/<name>`.
    pub fn external(cfg: &ForgeConfig, ext: &ExternalConfig) -> Self {
        Dependency {
            name: ext.name.clone(),
            source_dir: cfg.paths.vendor.join(&ext.name),
            build_dir: cfg.paths.build.join(&ext.name),
            prefix_dir: cfg.paths.packages.join(&ext.name),
            options: ext.options.clone(),
        }
    }

    /// Descriptor for a built first-party component. It builds and installs
    /// under its own source root (driven by the preset document there).
    pub fn component(name: &str, dir: &Path) -> Self {
        Dependency {
            name: name.to_string(),
            source_dir: dir.to_path_buf(),
            build_dir: dir.join("build"),
            prefix_dir: dir.join("build/packages"),
            options: Vec::new(),
        }
    }

    pub fn exists(&self, root: &Path) -> bool {
        root.join(&self.source_dir).is_dir()
    }
}

/// Verify every dependency's source tree is checked out, printing one status
/// line per entry. Fails with the first missing name before any build
/// command is issued, so a scope is never partially built.
pub fn verify(root: &Path, deps: &[Dependency]) -> Result<()> {
    let mut missing = None;
    for dep in deps {
        if dep.exists(root) {
            println!("FOUND   {}", dep.source_dir.display());
        } else {
            println!("MISSING {}", dep.source_dir.display());
            if missing.is_none() {
                missing = Some(dep.name.clone());
            }
        }
    }
    if let Some(name) = missing {
        return Err(ForgeError::MissingSource(name).into());
    }
    Ok(())
}

/// The prefix-path directory list: the shared packages root first, then each
/// dependency's own prefix in registry order. Appending a new dependency
/// never reorders or rewrites the existing entries.
pub fn prefix_dirs(packages: &Path, deps: &[Dependency]) -> Vec<PathBuf> {
    let mut dirs = vec![packages.to_path_buf()];
    dirs.extend(deps.iter().map(|d| d.prefix_dir.clone()));
    dirs
}
