//! Configuration for the `extfind` binary
//!
//! - CLI argument parsing using clap derive macros
//! - Validation into a runtime [`FindConfig`]

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::FindError;

/// Default overall time budget before cancellation fires.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default extension searched for.
pub const DEFAULT_EXTENSION: &str = ".go";

/// Find files by extension, gated on an operator signal
#[derive(Parser, Debug, Clone)]
#[command(
    name = "extfind",
    version,
    about = "Find files by extension, gated on an operator signal",
    long_about = "Recursively lists ROOT (default: the working directory) and prints every file \
                  whose extension matches --ext.\n\n\
                  Each directory waits for a go-ahead before it is read: send SIGUSR1 to the \
                  process, or pass --proceed to start right away. SIGINT/SIGTERM or the \
                  --timeout budget cancel the search; cancelled searches print what they had.",
    after_help = "EXAMPLES:\n    \
        extfind --proceed\n    \
        extfind --ext .rs src/ --proceed --sorted\n    \
        extfind -t 60 &  kill -USR1 $!"
)]
pub struct CliArgs {
    /// Directory to search (defaults to the working directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Extension to keep, with or without the leading dot
    #[arg(short, long, default_value = DEFAULT_EXTENSION, value_name = "EXT")]
    pub ext: String,

    /// Overall time budget in seconds before the search is cancelled
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Open the gate immediately instead of waiting for SIGUSR1
    #[arg(short, long)]
    pub proceed: bool,

    /// Resolve name collisions by path order instead of listing order
    #[arg(long)]
    pub sorted: bool,

    /// Enable debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct FindConfig {
    pub root: Option<PathBuf>,
    pub extension: String,
    pub timeout: Duration,
    pub proceed_immediately: bool,
    pub sorted: bool,
    pub verbose: bool,
}

impl FindConfig {
    pub fn from_args(args: CliArgs) -> Result<Self, FindError> {
        if args.timeout == 0 {
            return Err(FindError::InvalidConfig("timeout must be at least 1 second".into()));
        }

        Ok(Self {
            root: args.root,
            extension: normalize_extension(&args.ext)?,
            timeout: Duration::from_secs(args.timeout),
            proceed_immediately: args.proceed,
            sorted: args.sorted,
            verbose: args.verbose,
        })
    }
}

/// `"go"` and `".go"` both become `".go"`. Empty stays empty (matches
/// dotless names).
fn normalize_extension(ext: &str) -> Result<String, FindError> {
    if ext.contains(std::path::is_separator) {
        return Err(FindError::InvalidConfig(format!(
            "extension {ext:?} contains a path separator"
        )));
    }
    if ext.is_empty() || ext.starts_with('.') {
        Ok(ext.to_string())
    } else {
        Ok(format!(".{ext}"))
    }
}
