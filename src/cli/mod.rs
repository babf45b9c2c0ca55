//! Command-line interface for the import resolver.
//!
//! The contract is deliberately small, since the consumer is a build tool
//! rather than a person:
//!
//! ```bash
//! resolve-imports <ROOT_PATH> <ENTRY_FILE>
//! ```
//!
//! - Success prints a single-line JSON array of absolute file paths on
//!   stdout and exits 0. An empty result is `[]`, still exit 0.
//! - Missing arguments exit non-zero with a diagnostic on stderr and nothing
//!   on stdout.
//! - A missing entry file or unrecognized entry extension is not an error:
//!   the tool prints `[]` and exits 0, because the consumer prefers an
//!   under-approximate dependency list over a failed build step.
//!
//! All logging goes to stderr so stdout stays machine-parsable.
//!
//! # Examples
//!
//! ```bash
//! resolve-imports /proj src/posts/intro.mdx
//! # ["/proj/src/components/chart.tsx","/proj/src/posts/intro.mdx"]
//!
//! resolve-imports --verbose /proj src/main.ts
//! ```

use crate::core::ResolveError;
use crate::resolver::ImportResolver;
use crate::utils::{clean_path, to_output_string};
use anyhow::Result;
use clap::Parser;
use clap::builder::TypedValueParser as _;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Top-level CLI definition.
#[derive(Parser)]
#[command(
    name = "resolve-imports",
    about = "Resolve the transitive local import set of a JS/TS/MDX entry file",
    version,
    long_about = "Resolves every project-local file a given entry file transitively depends on, \
crossing between module imports (statically analyzed) and MDX import directives (extracted from \
raw text). Prints the set as a single-line JSON array of absolute paths."
)]
pub struct Cli {
    /// Project root directory; base for all relative resolution.
    #[arg(value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    root_path: PathBuf,

    /// Entry file, absolute or relative to the project root.
    #[arg(value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    entry_file: PathBuf,

    /// Enable debug output (equivalent to RUST_LOG=debug).
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress everything except errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Execute the resolver and print the result.
    ///
    /// # Errors
    ///
    /// Returns an error only for argument-level problems; per-file failures
    /// degrade to a smaller (possibly empty) result set.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        if self.root_path.as_os_str().is_empty() {
            return Err(ResolveError::EmptyArgument {
                name: "root_path".to_string(),
            }
            .into());
        }
        if self.entry_file.as_os_str().is_empty() {
            return Err(ResolveError::EmptyArgument {
                name: "entry_file".to_string(),
            }
            .into());
        }

        let root = clean_path(&std::path::absolute(&self.root_path)?);
        let resolver = ImportResolver::new(root);

        let dependencies = match resolver.resolve(&self.entry_file).await {
            Ok(dependencies) => dependencies,
            Err(err) if err.yields_empty_result() => {
                warn!(error = %err, "emitting empty dependency set");
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };

        let output: Vec<String> = dependencies.iter().map(|p| to_output_string(p)).collect();
        println!("{}", serde_json::to_string(&output)?);
        Ok(())
    }

    /// Install the tracing subscriber, writing to stderr.
    ///
    /// `--verbose` forces debug level, `--quiet` errors only; otherwise
    /// `RUST_LOG` decides, defaulting to warnings.
    fn init_logging(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_positionals() {
        let cli = Cli::parse_from(["resolve-imports", "/proj", "src/a.mdx"]);
        assert_eq!(cli.root_path, PathBuf::from("/proj"));
        assert_eq!(cli.entry_file, PathBuf::from("src/a.mdx"));
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["resolve-imports", "/proj"]).is_err());
        assert!(Cli::try_parse_from(["resolve-imports"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["resolve-imports", "-v", "-q", "/proj", "a.mdx"]).is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
