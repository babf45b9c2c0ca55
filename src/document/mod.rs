//! Document (MDX) handling.
//!
//! MDX documents mix markup with real import statements. A conventional
//! module analyzer never sees those statements, so the resolver extracts them
//! straight from the raw text with the scanner in [`imports`].

pub mod imports;

pub use imports::{extract_import_references, is_local_reference};
