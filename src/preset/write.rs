//! Preset document persistence.
//!
//! Regeneration is total replacement: the new document is serialized to a
//! temporary sibling and renamed over the target, so a previous document
//! never bleeds into the new one and an interrupted run never leaves the
//! path empty.

use super::PresetDocument;
use crate::error::ForgeError;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Serialize `document` as indented JSON and persist it at `path`,
/// replacing any previous file. Fails with [`ForgeError::Write`] when the
/// target directory is missing or unwritable.
pub fn write(path: &Path, document: &PresetDocument) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "CMakePresets.json".to_string());
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp, json).map_err(|source| ForgeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| ForgeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForgeConfig;
    use crate::preset::tree::build_tree;
    use tempfile::TempDir;

    fn document(names: &[&str]) -> PresetDocument {
        let cfg = ForgeConfig::default();
        let deps: Vec<_> = names
            .iter()
            .map(|n| {
                crate::deps::Dependency::external(
                    &cfg,
                    &crate::config::ExternalConfig {
                        name: (*n).to_string(),
                        options: Vec::new(),
                    },
                )
            })
            .collect();
        build_tree(Path::new("/work"), &cfg.paths.packages, &deps)
    }

    #[test]
    fn writes_parseable_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakePresets.json");

        write(&path, &document(&["glfw"])).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["version"], 3);
        assert_eq!(parsed["configurePresets"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn replacement_leaves_only_the_new_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CMakePresets.json");

        write(&path, &document(&["glfw", "spdlog"])).unwrap();
        write(&path, &document(&["glfw"])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("packages/glfw"));
        assert!(!content.contains("spdlog"));
        // No temp file left behind.
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir/CMakePresets.json");

        let err = write(&path, &document(&["glfw"])).unwrap_err();
        let forge = err.downcast_ref::<ForgeError>().unwrap();
        assert!(matches!(forge, ForgeError::Write { .. }));
    }
}
