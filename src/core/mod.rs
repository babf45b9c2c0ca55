//! Core types for the import resolver.
//!
//! This module provides the foundations the rest of the crate builds on:
//!
//! - [`ArtifactKind`] — the tagged variant distinguishing modules from
//!   documents, with the recognized extension sets
//! - [`ResolveError`] — strongly-typed errors covering the resolver's whole
//!   failure taxonomy
//! - [`ErrorContext`] / [`user_friendly_error`] — user-facing error display
//!   with suggestions, used by the CLI entry point
//!
//! Every operation that can fail returns a [`Result`] carrying one of these
//! error types; per-file failures are designed to degrade gracefully rather
//! than abort a run.

pub mod artifact;
pub mod error;

pub use artifact::{ArtifactKind, DOCUMENT_EXTENSIONS, MODULE_EXTENSIONS};
pub use error::{ErrorContext, ResolveError, user_friendly_error};
