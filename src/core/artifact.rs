//! Artifact kind classification for the resolver.
//!
//! The resolver crosses two distinct kinds of project files:
//!
//! - **Modules**: conventional JavaScript/TypeScript sources whose imports
//!   are discoverable by static module analysis (`.js`, `.jsx`, `.ts`, `.tsx`)
//! - **Documents**: MDX files mixing markup and code, whose import directives
//!   appear as plain text invisible to a module analyzer (`.mdx`)
//!
//! [`ArtifactKind`] is the single place that answers "what kind of file is
//! this"; traversal logic dispatches on it rather than sniffing extensions at
//! call sites.

use std::fmt;
use std::path::Path;

/// File extensions treated as conventional source modules.
pub const MODULE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// File extensions treated as rich documents with text-level import directives.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["mdx"];

/// The kind of a project artifact, determined by file extension.
///
/// Files whose extension is in neither set are outside the resolver's world:
/// they are never traversed and never enter the dependency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// A JS/TS source file analyzable by the module graph adapter.
    Module,
    /// An MDX document whose imports must be extracted from raw text.
    Document,
}

impl ArtifactKind {
    /// Classify a path by its extension.
    ///
    /// Returns `None` for paths with no extension or an unrecognized one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resolve_imports::core::ArtifactKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(ArtifactKind::from_path(Path::new("src/app.tsx")), Some(ArtifactKind::Module));
    /// assert_eq!(ArtifactKind::from_path(Path::new("posts/intro.mdx")), Some(ArtifactKind::Document));
    /// assert_eq!(ArtifactKind::from_path(Path::new("README.md")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if MODULE_EXTENSIONS.contains(&ext) {
            Some(Self::Module)
        } else if DOCUMENT_EXTENSIONS.contains(&ext) {
            Some(Self::Document)
        } else {
            None
        }
    }

    /// All recognized source extensions, modules first.
    ///
    /// A document may import another document or a module, so file location
    /// considers both sets when expanding an extension-less import target.
    pub fn all_extensions() -> impl Iterator<Item = &'static str> {
        MODULE_EXTENSIONS.iter().chain(DOCUMENT_EXTENSIONS.iter()).copied()
    }

    /// Whether this artifact carries text-level import directives.
    #[must_use]
    pub const fn is_document(self) -> bool {
        matches!(self, Self::Document)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => write!(f, "module"),
            Self::Document => write!(f, "document"),
        }
    }
}
