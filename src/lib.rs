//! resolve-imports — cross-format transitive import resolution.
//!
//! Given a project root and one entry file, this crate computes the full set
//! of project-local source files the entry transitively depends on, so a
//! downstream build tool knows exactly which files to watch and compile.
//!
//! The interesting part is that the graph crosses two artifact kinds:
//!
//! - **Modules** (`.js`, `.jsx`, `.ts`, `.tsx`) — imports are found by
//!   static analysis of the source ([`resolver::ModuleGraphAdapter`])
//! - **Documents** (`.mdx`) — imports are plain text inside markup, invisible
//!   to a module analyzer, and are extracted by a dedicated scanner
//!   ([`document::imports`])
//!
//! The walker ([`resolver::ImportResolver`]) alternates between the two:
//! documents discovered by module analysis are re-scanned as text, and files
//! discovered in document text are analyzed as modules when their extension
//! says so. A per-run visited registry makes cyclic imports terminate.
//!
//! # Core modules
//!
//! - [`cli`] - Command-line interface and result emission
//! - [`core`] - Artifact kinds and the error taxonomy
//! - [`resolver`] - The graph walker, file locator, and module analyzer
//! - [`document`] - Import directive extraction from MDX text
//! - [`utils`] - Path normalization and vendor-tree detection
//!
//! # Library usage
//!
//! ```rust,no_run
//! use resolve_imports::resolver::ImportResolver;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let resolver = ImportResolver::new("/proj");
//! let deps = resolver.resolve(Path::new("src/posts/intro.mdx")).await?;
//! println!("{}", serde_json::to_string(&deps)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Guarantees
//!
//! Every path in the result exists on disk, lies under the project root, and
//! is not inside a vendor (`node_modules`) subtree. The result is sorted and
//! duplicate-free. Per-file failures never abort a run; they shrink the
//! result instead.

pub mod cli;
pub mod core;
pub mod document;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
