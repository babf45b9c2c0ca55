//! Static module-dependency analysis for JS/TS source files.
//!
//! [`ModuleGraphAdapter`] computes the transitive set of project-local files
//! reachable from one module through `import`/`export ... from`, `require()`
//! and dynamic `import()` specifiers. This is reachability analysis, not
//! compilation: specifiers are pulled out of the source text, nothing is type
//! checked, and syntax the scanner does not understand simply contributes no
//! edges.
//!
//! Resolution follows require-style semantics for relative specifiers:
//! `./x` tries `x` with each recognized extension, then `x/index.<ext>`. Bare
//! specifiers (`react`, `lodash/merge`) name packages in the vendor tree and
//! are never followed. Anything under `node_modules`, or escaping the project
//! root, is excluded from the returned set.
//!
//! A module that cannot be read at all yields [`ResolveError::AdapterFailure`];
//! the caller treats that as zero reachable dependencies so the rest of the
//! walk continues.

use crate::core::{ArtifactKind, ResolveError};
use crate::utils::{clean_path, is_vendored};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Wraps static import analysis of a module into a transitive closure.
#[derive(Debug, Clone)]
pub struct ModuleGraphAdapter {
    root: PathBuf,
}

impl ModuleGraphAdapter {
    /// Create an adapter scoped to the project root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return the transitive local file set reachable from `entry`.
    ///
    /// The entry itself is always included. Files that resolve but cannot be
    /// read mid-walk are kept in the set (they exist and are dependencies)
    /// but contribute no further edges.
    ///
    /// # Errors
    ///
    /// [`ResolveError::AdapterFailure`] if the entry module itself cannot be
    /// read.
    pub async fn transitive_dependencies(
        &self,
        entry: &Path,
    ) -> Result<Vec<PathBuf>, ResolveError> {
        // Surface unreadable entries as an adapter failure up front; every
        // later read error is local to one branch.
        if let Err(err) = tokio::fs::metadata(entry).await {
            return Err(ResolveError::AdapterFailure {
                path: entry.to_path_buf(),
                reason: err.to_string(),
            });
        }

        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut reachable = Vec::new();
        let mut frontier = vec![entry.to_path_buf()];
        visited.insert(entry.to_path_buf());

        while let Some(file) = frontier.pop() {
            reachable.push(file.clone());

            // Documents are returned for the caller to scan; module analysis
            // cannot see their text-level directives.
            if ArtifactKind::from_path(&file) != Some(ArtifactKind::Module) {
                continue;
            }

            let content = match tokio::fs::read_to_string(&file).await {
                Ok(content) => content,
                Err(err) if file == entry => {
                    return Err(ResolveError::AdapterFailure {
                        path: file,
                        reason: err.to_string(),
                    });
                }
                Err(err) => {
                    warn!(path = %file.display(), error = %err, "skipping unreadable module");
                    continue;
                }
            };

            let base = file.parent().unwrap_or(&self.root);
            for specifier in extract_specifiers(&content) {
                let Some(resolved) = self.resolve_specifier(base, &specifier) else {
                    continue;
                };
                if visited.insert(resolved.clone()) {
                    frontier.push(resolved);
                }
            }
        }

        Ok(reachable)
    }

    /// Resolve one import specifier relative to the importing file's directory.
    ///
    /// Returns `None` for bare package specifiers, unresolvable targets, and
    /// files outside the project root or inside the vendor tree.
    fn resolve_specifier(&self, base: &Path, specifier: &str) -> Option<PathBuf> {
        // Only relative specifiers name project files; everything else is a
        // package import satisfied from the vendor tree.
        if !specifier.starts_with("./") && !specifier.starts_with("../") {
            return None;
        }

        let joined = clean_path(&base.join(specifier));

        let mut candidates = Vec::new();
        if ArtifactKind::from_path(&joined).is_some() {
            candidates.push(joined.clone());
        }
        for ext in ArtifactKind::all_extensions() {
            let mut with_ext = joined.as_os_str().to_owned();
            with_ext.push(format!(".{ext}"));
            candidates.push(PathBuf::from(with_ext));
        }
        for ext in ArtifactKind::all_extensions() {
            candidates.push(joined.join(format!("index.{ext}")));
        }

        for candidate in candidates {
            if !candidate.is_file() {
                continue;
            }
            if is_vendored(&candidate) || !candidate.starts_with(&self.root) {
                debug!(path = %candidate.display(), "resolved import is outside project scope");
                return None;
            }
            return Some(candidate);
        }

        debug!(specifier, base = %base.display(), "import specifier did not resolve");
        None
    }
}

/// Pull every import specifier out of module source text.
///
/// Three directive shapes are recognized: `import`/`export ... from` clauses
/// (including multi-line ones), side-effect imports, and `require()` or
/// dynamic `import()` calls.
fn extract_specifiers(content: &str) -> Vec<String> {
    let mut specifiers = Vec::new();

    if let Ok(re) = Regex::new(r#"(?m)^\s*(?:import|export)\s[^'"]*?from\s*['"]([^'"]+)['"]"#) {
        for cap in re.captures_iter(content) {
            if let Some(spec) = cap.get(1) {
                specifiers.push(spec.as_str().to_string());
            }
        }
    }

    if let Ok(re) = Regex::new(r#"(?m)^\s*import\s*['"]([^'"]+)['"]"#) {
        for cap in re.captures_iter(content) {
            if let Some(spec) = cap.get(1) {
                specifiers.push(spec.as_str().to_string());
            }
        }
    }

    if let Ok(re) = Regex::new(r#"(?:\brequire|\bimport)\s*\(\s*['"]([^'"]+)['"]\s*\)"#) {
        for cap in re.captures_iter(content) {
            if let Some(spec) = cap.get(1) {
                specifiers.push(spec.as_str().to_string());
            }
        }
    }

    specifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ProjectFixture;

    #[test]
    fn test_extract_static_imports() {
        let content = r#"
import React from "react";
import { helper } from "./lib/helper";
export { thing } from './lib/thing';
"#;
        let specs = extract_specifiers(content);
        assert_eq!(specs, vec!["react", "./lib/helper", "./lib/thing"]);
    }

    #[test]
    fn test_extract_multi_line_import() {
        let content = "import {\n    a,\n    b,\n} from \"./wide\";\n";
        assert_eq!(extract_specifiers(content), vec!["./wide"]);
    }

    #[test]
    fn test_extract_require_and_dynamic_import() {
        let content = r#"
const x = require("./cjs-dep");
const y = await import('./lazy');
"#;
        let specs = extract_specifiers(content);
        assert!(specs.contains(&"./cjs-dep".to_string()));
        assert!(specs.contains(&"./lazy".to_string()));
    }

    #[test]
    fn test_extract_side_effect_import() {
        let content = "import \"./polyfill\";\n";
        assert_eq!(extract_specifiers(content), vec!["./polyfill"]);
    }

    #[tokio::test]
    async fn test_transitive_closure_follows_relative_imports() {
        let fixture = ProjectFixture::new();
        fixture.write("src/a.ts", "import { b } from \"./b\";\n");
        fixture.write("src/b.ts", "import { c } from \"./sub/c\";\n");
        fixture.write("src/sub/c.ts", "export const c = 1;\n");

        let adapter = ModuleGraphAdapter::new(fixture.root());
        let mut deps =
            adapter.transitive_dependencies(&fixture.root().join("src/a.ts")).await.unwrap();
        deps.sort();

        assert_eq!(
            deps,
            vec![
                fixture.root().join("src/a.ts"),
                fixture.root().join("src/b.ts"),
                fixture.root().join("src/sub/c.ts"),
            ]
        );
    }

    #[tokio::test]
    async fn test_bare_specifiers_not_followed() {
        let fixture = ProjectFixture::new();
        fixture.write("src/a.ts", "import React from \"react\";\n");
        fixture.write("node_modules/react/index.js", "module.exports = {};\n");

        let adapter = ModuleGraphAdapter::new(fixture.root());
        let deps =
            adapter.transitive_dependencies(&fixture.root().join("src/a.ts")).await.unwrap();
        assert_eq!(deps, vec![fixture.root().join("src/a.ts")]);
    }

    #[tokio::test]
    async fn test_module_cycle_terminates() {
        let fixture = ProjectFixture::new();
        fixture.write("src/x.ts", "import { y } from \"./y\";\n");
        fixture.write("src/y.ts", "import { x } from \"./x\";\n");

        let adapter = ModuleGraphAdapter::new(fixture.root());
        let mut deps =
            adapter.transitive_dependencies(&fixture.root().join("src/x.ts")).await.unwrap();
        deps.sort();

        assert_eq!(deps, vec![fixture.root().join("src/x.ts"), fixture.root().join("src/y.ts")]);
    }

    #[tokio::test]
    async fn test_index_file_resolution() {
        let fixture = ProjectFixture::new();
        fixture.write("src/a.ts", "import { w } from \"./widgets\";\n");
        fixture.write("src/widgets/index.ts", "export const w = 1;\n");

        let adapter = ModuleGraphAdapter::new(fixture.root());
        let mut deps =
            adapter.transitive_dependencies(&fixture.root().join("src/a.ts")).await.unwrap();
        deps.sort();

        assert_eq!(
            deps,
            vec![fixture.root().join("src/a.ts"), fixture.root().join("src/widgets/index.ts")]
        );
    }

    #[tokio::test]
    async fn test_document_returned_but_not_scanned() {
        let fixture = ProjectFixture::new();
        fixture.write("src/a.ts", "import Post from \"./post.mdx\";\n");
        // The document imports something the module analyzer must not follow.
        fixture.write("src/post.mdx", "import Deep from \"./deep\";\n");
        fixture.write("src/deep.mdx", "# Deep\n");

        let adapter = ModuleGraphAdapter::new(fixture.root());
        let mut deps =
            adapter.transitive_dependencies(&fixture.root().join("src/a.ts")).await.unwrap();
        deps.sort();

        assert_eq!(deps, vec![fixture.root().join("src/a.ts"), fixture.root().join("src/post.mdx")]);
    }

    #[tokio::test]
    async fn test_missing_entry_is_adapter_failure() {
        let fixture = ProjectFixture::new();
        let adapter = ModuleGraphAdapter::new(fixture.root());

        let err = adapter
            .transitive_dependencies(&fixture.root().join("src/gone.ts"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::AdapterFailure { .. }));
    }

    #[tokio::test]
    async fn test_unresolvable_specifier_dropped() {
        let fixture = ProjectFixture::new();
        fixture.write("src/a.ts", "import { gone } from \"./missing\";\n");

        let adapter = ModuleGraphAdapter::new(fixture.root());
        let deps =
            adapter.transitive_dependencies(&fixture.root().join("src/a.ts")).await.unwrap();
        assert_eq!(deps, vec![fixture.root().join("src/a.ts")]);
    }
}
