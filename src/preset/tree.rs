//! Preset tree construction.
//!
//! `build_tree` is a pure, total function of its inputs: the same root and
//! dependency list always produce an identical document, record for record,
//! in insertion order. The document always enumerates all three host
//! platforms and every (arch, build type) pair, regardless of what a single
//! invocation asked to build, so a later run can select a different leaf
//! without regenerating.

use super::{ConfigurePreset, MirrorPreset, PresetDocument, DOCUMENT_VERSION};
use crate::deps::{self, Dependency};
use crate::paths;
use crate::request::{Arch, BuildType, HostPlatform};
use std::path::Path;

/// Build the full preset document for the given dependency set.
///
/// `root` anchors the absolute prefix-path variant embedded in the document;
/// the document may be consumed from a different working directory than the
/// one forge ran in.
pub fn build_tree(root: &Path, packages: &Path, dependencies: &[Dependency]) -> PresetDocument {
    let prefix_dirs = deps::prefix_dirs(packages, dependencies);
    let absolute: Vec<String> = prefix_dirs
        .iter()
        .map(|dir| paths::display(&paths::absolutize(root, dir)))
        .collect();

    let mut configure = vec![ConfigurePreset::common_base()];
    for host in HostPlatform::ALL {
        // Each platform base composes with its own separator convention,
        // not the generating host's.
        let prefix_path = paths::compose(host, &absolute);
        configure.push(ConfigurePreset::platform_base(host, prefix_path));
    }
    for host in HostPlatform::ALL {
        for build_type in BuildType::ALL {
            for arch in Arch::ALL {
                configure.push(ConfigurePreset::leaf(host, arch, build_type));
            }
        }
    }

    let mut mirrors = Vec::with_capacity(configure.len());
    for preset in &configure {
        if preset.is_hidden() {
            mirrors.push(MirrorPreset::hidden(preset));
        } else {
            mirrors.push(MirrorPreset::of_leaf(preset));
        }
    }

    PresetDocument {
        version: DOCUMENT_VERSION,
        configure_presets: configure,
        build_presets: mirrors.clone(),
        test_presets: mirrors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForgeConfig;
    use std::collections::HashSet;

    fn externals(cfg: &ForgeConfig, names: &[&str]) -> Vec<Dependency> {
        names
            .iter()
            .map(|n| {
                Dependency::external(
                    cfg,
                    &crate::config::ExternalConfig {
                        name: (*n).to_string(),
                        options: Vec::new(),
                    },
                )
            })
            .collect()
    }

    fn sample() -> PresetDocument {
        let cfg = ForgeConfig::default();
        let deps = externals(&cfg, &["glfw", "spdlog", "glm"]);
        build_tree(Path::new("/work"), &cfg.paths.packages, &deps)
    }

    #[test]
    fn one_common_three_bases_twelve_leaves() {
        let doc = sample();
        assert_eq!(doc.version, 3);
        assert_eq!(doc.configure_presets.len(), 16);

        let hidden = doc.configure_presets.iter().filter(|p| p.is_hidden()).count();
        assert_eq!(hidden, 4);
        assert_eq!(doc.configure_presets.len() - hidden, 12);
    }

    #[test]
    fn every_triple_has_exactly_one_leaf_and_mirrors() {
        let doc = sample();
        for host in HostPlatform::ALL {
            for build_type in BuildType::ALL {
                for arch in Arch::ALL {
                    let name = crate::preset::leaf_name(host, arch, build_type);
                    let leaves: Vec<_> = doc
                        .configure_presets
                        .iter()
                        .filter(|p| p.name == name)
                        .collect();
                    assert_eq!(leaves.len(), 1, "{name}");

                    let build: Vec<_> = doc
                        .build_presets
                        .iter()
                        .filter(|m| m.configure_preset.as_deref() == Some(name.as_str()))
                        .collect();
                    assert_eq!(build.len(), 1, "{name}");
                    assert_eq!(build[0].name, name);

                    let test: Vec<_> = doc
                        .test_presets
                        .iter()
                        .filter(|m| m.configure_preset.as_deref() == Some(name.as_str()))
                        .collect();
                    assert_eq!(test.len(), 1, "{name}");
                }
            }
        }
    }

    #[test]
    fn names_are_unique_within_the_document() {
        let doc = sample();
        let names: HashSet<_> = doc.configure_presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), doc.configure_presets.len());
    }

    #[test]
    fn every_reference_resolves() {
        let doc = sample();
        let configure: HashSet<_> =
            doc.configure_presets.iter().map(|p| p.name.as_str()).collect();

        for preset in &doc.configure_presets {
            if let Some(parent) = preset.inherits.as_deref() {
                assert!(configure.contains(parent), "{} -> {parent}", preset.name);
            }
        }
        for list in [&doc.build_presets, &doc.test_presets] {
            for mirror in list.iter() {
                if let Some(parent) = mirror.inherits.as_deref() {
                    assert!(configure.contains(parent), "{} -> {parent}", mirror.name);
                }
                if let Some(target) = mirror.configure_preset.as_deref() {
                    assert!(configure.contains(target), "{} => {target}", mirror.name);
                }
                if mirror.hidden != Some(true) {
                    assert!(mirror.configure_preset.is_some(), "{}", mirror.name);
                }
            }
        }
    }

    #[test]
    fn mirror_inherits_also_resolve_in_their_own_list() {
        // cmake resolves build/test inherits within the same list; the
        // hidden mirrors carry the same names as their configure parents.
        let doc = sample();
        let build_names: HashSet<_> = doc.build_presets.iter().map(|m| m.name.as_str()).collect();
        for mirror in &doc.build_presets {
            if let Some(parent) = mirror.inherits.as_deref() {
                assert!(build_names.contains(parent), "{} -> {parent}", mirror.name);
            }
        }
    }

    #[test]
    fn platform_prefix_paths_use_their_own_separator() {
        let doc = sample();
        let base = |tag: &str| {
            doc.configure_presets
                .iter()
                .find(|p| p.name == tag)
                .unwrap()
                .cache_variables
                .get("CMAKE_PREFIX_PATH")
                .unwrap()
                .clone()
        };

        let windows = base("windows");
        assert!(windows.contains(';'));
        assert!(windows.ends_with(';'));

        let linux = base("linux");
        assert!(linux.contains("/work/build/packages:"));
        assert!(linux.contains("/work/build/packages/glfw:"));
        assert!(linux.ends_with(':'));

        // Same dependency order in every variant.
        let glfw_pos = linux.find("packages/glfw").unwrap();
        let spdlog_pos = linux.find("packages/spdlog").unwrap();
        let glm_pos = linux.find("packages/glm").unwrap();
        assert!(glfw_pos < spdlog_pos && spdlog_pos < glm_pos);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = serde_json::to_string(&sample()).unwrap();
        let b = serde_json::to_string(&sample()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn appending_a_dependency_only_extends_the_tail() {
        let cfg = ForgeConfig::default();
        let mut deps = externals(&cfg, &["glfw", "spdlog"]);
        let before = build_tree(Path::new("/work"), &cfg.paths.packages, &deps);

        deps.push(Dependency::component("engine", Path::new("engine")));
        let after = build_tree(Path::new("/work"), &cfg.paths.packages, &deps);

        let path = |doc: &PresetDocument| {
            doc.configure_presets
                .iter()
                .find(|p| p.name == "linux")
                .unwrap()
                .cache_variables
                .get("CMAKE_PREFIX_PATH")
                .unwrap()
                .clone()
        };
        let old = path(&before);
        let new = path(&after);
        assert!(new.starts_with(&old));
        assert_eq!(
            new[old.len()..],
            *"/work/engine/build/packages:"
        );
    }
}
