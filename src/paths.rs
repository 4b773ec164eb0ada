//! Prefix-path composition.
//!
//! A prefix path is an ordered list of install directories handed to cmake
//! as a single string. Entries are each terminated by the platform's
//! separator rather than joined by it, and caller order is preserved:
//! later entries shadow earlier ones in cmake's own resolution order.

use crate::request::HostPlatform;
use std::path::{Path, PathBuf};

/// Compose a single prefix-path string from an ordered list of directories.
///
/// Uses `;` as the entry terminator on Windows and `:` elsewhere. An empty
/// list composes to an empty string.
pub fn compose<I, S>(host: HostPlatform, dirs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sep = host.path_separator();
    let mut out = String::new();
    for dir in dirs {
        out.push_str(dir.as_ref());
        out.push(sep);
    }
    out
}

/// Anchor a workspace-relative path to `root` without touching the
/// filesystem; the directory may not exist yet at composition time.
pub fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Display form used when paths are embedded in command lines or documents.
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_entries_are_semicolon_terminated() {
        assert_eq!(compose(HostPlatform::Windows, ["a", "b"]), "a;b;");
    }

    #[test]
    fn unix_entries_are_colon_terminated() {
        assert_eq!(compose(HostPlatform::Linux, ["a", "b"]), "a:b:");
        assert_eq!(compose(HostPlatform::MacOs, ["a", "b"]), "a:b:");
    }

    #[test]
    fn empty_list_composes_to_empty_string() {
        assert_eq!(compose(HostPlatform::Windows, Vec::<String>::new()), "");
        assert_eq!(compose(HostPlatform::Linux, Vec::<String>::new()), "");
    }

    #[test]
    fn caller_order_is_preserved() {
        assert_eq!(
            compose(HostPlatform::Linux, ["pkg", "pkg/glfw", "engine/build/packages"]),
            "pkg:pkg/glfw:engine/build/packages:"
        );
    }

    #[test]
    fn absolutize_anchors_relative_paths() {
        let root = Path::new("/work");
        assert_eq!(absolutize(root, Path::new("build")), PathBuf::from("/work/build"));
        assert_eq!(absolutize(root, Path::new("/abs")), PathBuf::from("/abs"));
    }
}
