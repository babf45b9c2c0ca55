//! Path utilities shared across the resolver.
//!
//! All bookkeeping sets in the resolver hold absolute, lexically-normalized
//! paths. Import references are joined onto a document's directory, which
//! introduces `.` and `..` components; [`clean_path`] removes them without
//! touching the filesystem so that two spellings of the same file compare
//! equal in the visited registry.
//!
//! Output paths are serialized with forward slashes on every platform
//! ([`to_output_string`]) so the emitted JSON is stable for downstream
//! scripts regardless of where the build runs.

use std::path::{Component, Path, PathBuf};

/// Directory name whose subtrees are excluded from resolution.
pub const VENDOR_DIR: &str = "node_modules";

/// Lexically normalize a path, resolving `.` and `..` components.
///
/// Unlike `canonicalize`, this never touches the filesystem and works for
/// paths that do not exist yet. A `..` at the start of a relative path is
/// preserved since there is nothing to pop.
///
/// # Examples
///
/// ```rust
/// use resolve_imports::utils::clean_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean_path(Path::new("/proj/src/./posts/../b.ts")), PathBuf::from("/proj/src/b.ts"));
/// assert_eq!(clean_path(Path::new("../shared/x.ts")), PathBuf::from("../shared/x.ts"));
/// ```
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Pop a normal component if there is one; a leading `..` has
                // to stay (relative paths escaping their base).
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                } else {
                    cleaned.push(Component::ParentDir);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Make `path` absolute by joining it onto `root` if it is relative.
///
/// The result is lexically normalized. `root` itself is assumed absolute.
#[must_use]
pub fn absolute_under(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        clean_path(path)
    } else {
        clean_path(&root.join(path))
    }
}

/// Whether any component of the path is the vendor directory.
///
/// Vendored files never enter the dependency set, even when reachable.
#[must_use]
pub fn is_vendored(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == VENDOR_DIR))
}

/// Render a path with forward slashes for script-consumable output.
///
/// Lockfile-style stability: the emitted JSON must not vary by platform
/// separator.
#[must_use]
pub fn to_output_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_removes_cur_dirs() {
        assert_eq!(clean_path(Path::new("/a/./b/./c.ts")), PathBuf::from("/a/b/c.ts"));
    }

    #[test]
    fn test_clean_path_resolves_parent_dirs() {
        assert_eq!(
            clean_path(Path::new("/proj/posts/../src/b.ts")),
            PathBuf::from("/proj/src/b.ts")
        );
        assert_eq!(clean_path(Path::new("/proj/a/b/../../c.ts")), PathBuf::from("/proj/c.ts"));
    }

    #[test]
    fn test_clean_path_keeps_leading_parent_dirs() {
        assert_eq!(clean_path(Path::new("../x/y.ts")), PathBuf::from("../x/y.ts"));
        assert_eq!(clean_path(Path::new("a/../../y.ts")), PathBuf::from("../y.ts"));
    }

    #[test]
    fn test_clean_path_does_not_pop_past_root() {
        assert_eq!(clean_path(Path::new("/../x.ts")), PathBuf::from("/../x.ts"));
    }

    #[test]
    fn test_absolute_under() {
        let root = Path::new("/proj");
        assert_eq!(absolute_under(root, Path::new("src/a.mdx")), PathBuf::from("/proj/src/a.mdx"));
        assert_eq!(
            absolute_under(root, Path::new("/elsewhere/a.mdx")),
            PathBuf::from("/elsewhere/a.mdx")
        );
    }

    #[test]
    fn test_is_vendored() {
        assert!(is_vendored(Path::new("/proj/node_modules/react/index.js")));
        assert!(is_vendored(Path::new("packages/app/node_modules/x.ts")));
        assert!(!is_vendored(Path::new("/proj/src/node_modules_like/x.ts")));
        assert!(!is_vendored(Path::new("/proj/src/a.mdx")));
    }

    #[test]
    fn test_to_output_string_uses_forward_slashes() {
        assert_eq!(to_output_string(Path::new("/proj/src/a.mdx")), "/proj/src/a.mdx");
    }
}
