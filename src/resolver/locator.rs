//! Project-tree search for extension-less import targets.
//!
//! A document import like `"./chart"` names no concrete file. The locator
//! expands such a target into the files that could implement it: a file named
//! `chart.<ext>` or an index file inside a `chart/` directory, for every
//! recognized source extension (a document may import another document or a
//! module, so both sets qualify). A target that already carries a recognized
//! extension (`"./chart.tsx"`) also matches as-is, mirroring how module
//! specifier resolution treats explicit extensions.
//!
//! Matching is by path suffix against the whole project tree, so the same
//! basename in different directories can produce several matches; the caller
//! expands every one. Zero matches means the reference is external or
//! unresolvable and is dropped silently.

use crate::core::ArtifactKind;
use crate::utils::{VENDOR_DIR, to_output_string};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Searches the project tree for files implementing an import target.
#[derive(Debug, Clone)]
pub struct FileLocator {
    root: PathBuf,
}

impl FileLocator {
    /// Create a locator rooted at the project directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find every file matching `target.<ext>` or `target/index.<ext>`.
    ///
    /// `target` is a root-relative, extension-less path. Vendor subtrees are
    /// never descended into; unreadable directory entries are skipped.
    /// Returned paths are absolute.
    #[must_use]
    pub fn locate(&self, target: &Path) -> Vec<PathBuf> {
        let target = to_output_string(target);
        if target.is_empty() || target.starts_with("..") {
            // Escapes the project root: nothing under the tree can match.
            return Vec::new();
        }

        let candidates = candidate_suffixes(&target);
        let mut matches = Vec::new();

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != VENDOR_DIR);

        for entry in walker {
            let Ok(entry) = entry else {
                // Permission or race error on one entry: skip, keep walking.
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path_str = to_output_string(entry.path());
            if candidates.iter().any(|c| matches_suffix(&path_str, c)) {
                trace!(path = %path_str, target = %target, "located import target");
                matches.push(entry.path().to_path_buf());
            }
        }

        if matches.is_empty() {
            debug!(target = %target, "no file matches import target; dropping reference");
        }
        matches
    }
}

/// Candidate path suffixes for an import target.
fn candidate_suffixes(target: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    // An import naming a recognized extension outright matches exactly.
    if ArtifactKind::from_path(Path::new(target)).is_some() {
        candidates.push(target.to_string());
    }
    for ext in ArtifactKind::all_extensions() {
        candidates.push(format!("{target}.{ext}"));
        candidates.push(format!("{target}/index.{ext}"));
    }
    candidates
}

/// Suffix match with a path-separator boundary.
///
/// `src/b.ts` matches the candidate `b.ts` but `src/sub.ts` must not.
fn matches_suffix(path: &str, candidate: &str) -> bool {
    if !path.ends_with(candidate) {
        return false;
    }
    let boundary = path.len() - candidate.len();
    boundary == 0 || path.as_bytes()[boundary - 1] == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ProjectFixture;

    #[test]
    fn test_locates_file_with_extension_appended() {
        let fixture = ProjectFixture::new();
        fixture.write("src/b.ts", "export const b = 1;\n");

        let locator = FileLocator::new(fixture.root());
        let matches = locator.locate(Path::new("src/b"));
        assert_eq!(matches, vec![fixture.root().join("src/b.ts")]);
    }

    #[test]
    fn test_locates_index_file_in_directory() {
        let fixture = ProjectFixture::new();
        fixture.write("src/widgets/index.tsx", "export default null;\n");

        let locator = FileLocator::new(fixture.root());
        let matches = locator.locate(Path::new("src/widgets"));
        assert_eq!(matches, vec![fixture.root().join("src/widgets/index.tsx")]);
    }

    #[test]
    fn test_locates_documents_too() {
        let fixture = ProjectFixture::new();
        fixture.write("posts/intro.mdx", "# Intro\n");

        let locator = FileLocator::new(fixture.root());
        let matches = locator.locate(Path::new("posts/intro"));
        assert_eq!(matches, vec![fixture.root().join("posts/intro.mdx")]);
    }

    #[test]
    fn test_locates_target_with_explicit_extension() {
        let fixture = ProjectFixture::new();
        fixture.write("src/b.ts", "export const b = 1;\n");

        let locator = FileLocator::new(fixture.root());
        let matches = locator.locate(Path::new("src/b.ts"));
        assert_eq!(matches, vec![fixture.root().join("src/b.ts")]);
    }

    #[test]
    fn test_multiple_matches_all_returned() {
        let fixture = ProjectFixture::new();
        fixture.write("a/src/b.ts", "export {};\n");
        fixture.write("b/src/b.ts", "export {};\n");

        let locator = FileLocator::new(fixture.root());
        let mut matches = locator.locate(Path::new("src/b"));
        matches.sort();
        assert_eq!(
            matches,
            vec![fixture.root().join("a/src/b.ts"), fixture.root().join("b/src/b.ts")]
        );
    }

    #[test]
    fn test_vendor_tree_excluded() {
        let fixture = ProjectFixture::new();
        fixture.write("node_modules/lib/src/b.ts", "export {};\n");

        let locator = FileLocator::new(fixture.root());
        assert!(locator.locate(Path::new("src/b")).is_empty());
    }

    #[test]
    fn test_suffix_requires_separator_boundary() {
        let fixture = ProjectFixture::new();
        fixture.write("src/sub.ts", "export {};\n");

        let locator = FileLocator::new(fixture.root());
        // Target "b" must not match "sub.ts".
        assert!(locator.locate(Path::new("b")).is_empty());
    }

    #[test]
    fn test_target_escaping_root_yields_nothing() {
        let fixture = ProjectFixture::new();
        fixture.write("src/b.ts", "export {};\n");

        let locator = FileLocator::new(fixture.root());
        assert!(locator.locate(Path::new("../src/b")).is_empty());
        assert!(locator.locate(Path::new("")).is_empty());
    }

    #[test]
    fn test_no_match_for_unrecognized_extension_files() {
        let fixture = ProjectFixture::new();
        fixture.write("src/b.css", "body {}\n");

        let locator = FileLocator::new(fixture.root());
        assert!(locator.locate(Path::new("src/b")).is_empty());
    }
}
