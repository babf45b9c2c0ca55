//! Error handling for the import resolver.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`ResolveError`]) for precise handling in code
//! 2. **User-friendly messages** ([`ErrorContext`]) with suggestions for CLI users
//!
//! # Fatal vs. degradable errors
//!
//! Only argument-level problems are fatal. Every per-file failure degrades to
//! "this file contributes nothing further" so that a consumer gets an
//! under-approximate dependency list instead of a crashed build step:
//!
//! - [`ResolveError::EntryNotFound`] / [`ResolveError::UnrecognizedExtension`]
//!   — non-fatal; the run emits an empty result set.
//! - [`ResolveError::ParseError`] — local to a single import directive; that
//!   reference is skipped and extraction continues.
//! - [`ResolveError::AdapterFailure`] — local to a single module; it is
//!   treated as having zero reachable dependencies and the walk continues.
//! - I/O errors mid-walk — the offending path is skipped.
//!
//! # Examples
//!
//! ```rust,no_run
//! use resolve_imports::core::{ResolveError, user_friendly_error};
//! use std::path::PathBuf;
//!
//! let err = ResolveError::EntryNotFound { path: PathBuf::from("src/missing.mdx") };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display(); // Colored error + suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for resolver operations.
///
/// Variants map one-to-one onto the resolver's error taxonomy. Callers match
/// on the variant to decide whether a failure is fatal, yields an empty
/// result, or is merely a dead end for one branch of the walk.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A required argument was present but empty.
    ///
    /// Clap rejects missing positionals before this is ever constructed; the
    /// variant exists for the empty-string case (`resolve-imports "" entry`).
    #[error("missing or empty argument: {name}")]
    EmptyArgument {
        /// Name of the offending argument.
        name: String,
    },

    /// The entry file does not exist on disk.
    ///
    /// Non-fatal: the resolver emits an empty dependency set.
    #[error("entry file not found: {}", path.display())]
    EntryNotFound {
        /// The absolute path that was checked.
        path: PathBuf,
    },

    /// The entry file's extension is not in the recognized source set.
    ///
    /// Non-fatal: the resolver emits an empty dependency set.
    #[error("unrecognized entry extension: {}", path.display())]
    UnrecognizedExtension {
        /// The entry path with the unrecognized extension.
        path: PathBuf,
    },

    /// The entry file lies outside the project scope.
    ///
    /// Vendored files and files outside the project root never enter the
    /// dependency set, so an entry there resolves to nothing. Non-fatal:
    /// the resolver emits an empty dependency set.
    #[error("entry file outside project scope: {}", path.display())]
    EntryExcluded {
        /// The entry path that is vendored or escapes the root.
        path: PathBuf,
    },

    /// An import directive could not be parsed.
    ///
    /// Local to one reference; the reference is skipped.
    #[error("malformed import directive: {context}")]
    ParseError {
        /// A short description of the directive that failed to parse.
        context: String,
    },

    /// The module graph adapter could not analyze a module file.
    ///
    /// Local to one module; treated as zero reachable dependencies.
    #[error("module analysis failed for {}: {reason}", path.display())]
    AdapterFailure {
        /// The module that could not be analyzed.
        path: PathBuf,
        /// Why the analyzer gave up.
        reason: String,
    },

    /// An I/O error from [`std::io::Error`].
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ResolveError {
    /// Whether this error yields an empty result set rather than a failure.
    ///
    /// The CLI contract requires exit 0 with `[]` for a missing entry file or
    /// an unrecognized entry extension.
    #[must_use]
    pub const fn yields_empty_result(&self) -> bool {
        matches!(
            self,
            Self::EntryNotFound { .. }
                | Self::UnrecognizedExtension { .. }
                | Self::EntryExcluded { .. }
        )
    }
}

/// Wrapper that pairs a [`ResolveError`] with user-facing guidance.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying resolver error.
    pub error: ResolveError,
    /// Optional suggestion for resolving the error.
    pub suggestion: Option<String>,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a basic error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: ResolveError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, shown in green in the terminal.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error, shown in yellow in the terminal.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details, and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Known [`ResolveError`] variants get tailored suggestions; everything else
/// falls back to a generic message carrying the original error text.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<ResolveError>() {
        Ok(resolve_error) => create_error_context(resolve_error),
        Err(other) => ErrorContext::new(ResolveError::ParseError {
            context: other.to_string(),
        })
        .with_suggestion("Run with --verbose for more information"),
    }
}

fn create_error_context(error: ResolveError) -> ErrorContext {
    match error {
        ResolveError::EmptyArgument { name } => {
            let suggestion = format!("Provide a non-empty value for <{name}>");
            ErrorContext::new(ResolveError::EmptyArgument { name })
                .with_suggestion(suggestion)
                .with_details("Usage: resolve-imports <ROOT_PATH> <ENTRY_FILE>")
        }

        err @ ResolveError::EntryNotFound { .. } => ErrorContext::new(err).with_suggestion(
            "Check that the entry file exists and the path is relative to the project root",
        ),

        err @ ResolveError::UnrecognizedExtension { .. } => ErrorContext::new(err)
            .with_details("Recognized extensions are .js, .jsx, .ts, .tsx and .mdx"),

        err @ ResolveError::EntryExcluded { .. } => ErrorContext::new(err).with_details(
            "Files under node_modules or outside the project root are never resolved",
        ),

        err @ ResolveError::AdapterFailure { .. } => ErrorContext::new(err)
            .with_details("The file was skipped; the rest of the graph still resolved"),

        err => ErrorContext::new(err),
    }
}
