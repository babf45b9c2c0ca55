//! Cross-format dependency graph resolution.
//!
//! This is the core of the crate: a traversal that crosses between modules
//! (whose imports a static analyzer can see) and documents (whose imports are
//! plain text). The walk is driven by an explicit frontier instead of call
//! recursion, with all state in an owned [`ResolutionContext`]:
//!
//! - **Visited registry** — every path is registered the moment it is pushed
//!   onto the frontier, before any descent. This single rule is what makes
//!   mutually-importing documents terminate; applying it after descent risks
//!   infinite recursion.
//! - **Dependency set** — a `BTreeSet` of absolute paths, so the final
//!   serialization is deterministic without a separate sort.
//!
//! Per-branch failures (unreadable file, analyzer failure) are logged and
//! treated as dead ends; the rest of the graph still resolves. Consumers
//! prefer an under-approximate list over an aborted run.

pub mod locator;
pub mod module_graph;

pub use locator::FileLocator;
pub use module_graph::ModuleGraphAdapter;

use crate::core::{ArtifactKind, ResolveError};
use crate::document::{extract_import_references, is_local_reference};
use crate::utils::{absolute_under, clean_path, is_vendored};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Per-run traversal state: the visited registry and the growing result.
///
/// Created at invocation start, discarded at invocation end; nothing is
/// shared across runs.
#[derive(Debug, Default)]
struct ResolutionContext {
    /// Paths already dispatched to the walker. Bounds the traversal.
    visited: HashSet<PathBuf>,
    /// Accumulated dependency set. Grows monotonically, never shrinks.
    dependencies: BTreeSet<PathBuf>,
}

impl ResolutionContext {
    /// Register a path as visited. Returns `false` if it already was.
    fn mark_visited(&mut self, path: &Path) -> bool {
        self.visited.insert(path.to_path_buf())
    }
}

/// Resolves the transitive local dependency set of a single entry file.
///
/// # Examples
///
/// ```rust,no_run
/// use resolve_imports::resolver::ImportResolver;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let resolver = ImportResolver::new("/proj");
/// let deps = resolver.resolve(Path::new("src/post.mdx")).await?;
/// for path in deps {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ImportResolver {
    root: PathBuf,
    locator: FileLocator,
    adapter: ModuleGraphAdapter,
}

impl ImportResolver {
    /// Create a resolver for one project root.
    ///
    /// The root should be an absolute, normalized directory path; the CLI
    /// layer takes care of that before constructing the resolver.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = clean_path(&root.into());
        let locator = FileLocator::new(&root);
        let adapter = ModuleGraphAdapter::new(&root);
        Self {
            root,
            locator,
            adapter,
        }
    }

    /// Resolve the full transitive dependency set of `entry`.
    ///
    /// `entry` may be absolute or relative to the project root. The returned
    /// paths are absolute, sorted, and deduplicated; every one exists on
    /// disk, lies under the root, and is outside the vendor tree.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::EntryNotFound`] if the entry does not exist
    /// - [`ResolveError::UnrecognizedExtension`] if its extension is outside
    ///   the recognized source set
    /// - [`ResolveError::EntryExcluded`] if the entry is vendored or escapes
    ///   the project root
    ///
    /// All three are non-fatal by contract: callers map them to an empty
    /// result.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub async fn resolve(&self, entry: &Path) -> Result<Vec<PathBuf>, ResolveError> {
        let entry = absolute_under(&self.root, entry);

        let Some(kind) = ArtifactKind::from_path(&entry) else {
            return Err(ResolveError::UnrecognizedExtension { path: entry });
        };
        // Same scope rule every other path obeys: nothing vendored or outside
        // the root may enter the dependency set, the entry included.
        if is_vendored(&entry) || !entry.starts_with(&self.root) {
            return Err(ResolveError::EntryExcluded { path: entry });
        }
        if !entry.is_file() {
            return Err(ResolveError::EntryNotFound { path: entry });
        }

        let mut ctx = ResolutionContext::default();
        let mut frontier: Vec<(PathBuf, ArtifactKind)> = Vec::new();

        // Cycle-safety invariant: mark before pushing, uniformly for both
        // artifact kinds.
        ctx.mark_visited(&entry);
        frontier.push((entry, kind));

        while let Some((path, kind)) = frontier.pop() {
            match kind {
                ArtifactKind::Document => {
                    self.walk_document(&path, &mut ctx, &mut frontier).await;
                }
                ArtifactKind::Module => {
                    self.walk_module(&path, &mut ctx, &mut frontier).await;
                }
            }
        }

        Ok(ctx.dependencies.into_iter().collect())
    }

    /// Process one document: extract its directives, expand each into
    /// concrete files, queue the unvisited ones, then record the document
    /// itself as a dependency.
    async fn walk_document(
        &self,
        path: &Path,
        ctx: &mut ResolutionContext,
        frontier: &mut Vec<(PathBuf, ArtifactKind)>,
    ) {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(err) => {
                // Dead end: the document still counts as a dependency, its
                // imports are just unknown.
                warn!(path = %path.display(), error = %err, "could not read document");
                ctx.dependencies.insert(path.to_path_buf());
                return;
            }
        };

        let document_dir = path.parent().unwrap_or(&self.root);

        for reference in extract_import_references(&text) {
            if !is_local_reference(&reference) {
                debug!(reference, "import reference is not project-local");
                continue;
            }

            // Scope the reference to the document's own directory, then make
            // it root-relative for the tree search.
            let joined = clean_path(&document_dir.join(&reference));
            let Ok(relative) = joined.strip_prefix(&self.root) else {
                debug!(reference, "import reference escapes the project root");
                continue;
            };

            for target in self.locator.locate(relative) {
                let target = clean_path(&target);
                let Some(kind) = ArtifactKind::from_path(&target) else {
                    continue;
                };
                if ctx.mark_visited(&target) {
                    frontier.push((target, kind));
                }
            }
        }

        ctx.dependencies.insert(path.to_path_buf());
    }

    /// Process one module: take the analyzer's transitive closure, record
    /// every file in it, and queue any documents for text-level scanning.
    async fn walk_module(
        &self,
        path: &Path,
        ctx: &mut ResolutionContext,
        frontier: &mut Vec<(PathBuf, ArtifactKind)>,
    ) {
        let reachable = match self.adapter.transitive_dependencies(path).await {
            Ok(reachable) => reachable,
            Err(err) => {
                // Zero reachable dependencies for this module; the walk goes on.
                warn!(error = %err, "module analysis failed");
                ctx.dependencies.insert(path.to_path_buf());
                return;
            }
        };

        for file in reachable {
            let file = clean_path(&file);
            if is_vendored(&file) {
                continue;
            }

            // Module analysis cannot see directives inside document bodies,
            // so documents it surfaces are walked again as documents.
            let needs_descent = ArtifactKind::from_path(&file)
                .is_some_and(ArtifactKind::is_document);

            if needs_descent {
                if ctx.mark_visited(&file) {
                    frontier.push((file.clone(), ArtifactKind::Document));
                }
            } else {
                ctx.mark_visited(&file);
            }

            ctx.dependencies.insert(file);
        }
    }
}
