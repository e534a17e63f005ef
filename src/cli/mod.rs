//! Command-line interface for pkgcrate.
//!
//! # Commands
//!
//! - `generate` - resolve every package and write one recipe per package
//! - `show` - resolve every package and print the result without writing anything
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - debug logging for pkgcrate
//! - `--quiet` / `-q` - no logging at all
//!
//! Without either flag, `RUST_LOG` decides, defaulting to `pkgcrate=info`.
//!
//! # Examples
//!
//! ```bash
//! # Write build/<crate>/PKGBUILD for every entry of packages.yaml
//! pkgcrate generate
//!
//! # Use another template and output directory
//! pkgcrate generate --template templates/APKBUILD --output out
//!
//! # Inspect what would be generated
//! pkgcrate show --format json
//!
//! # Point at a registry mirror
//! PKGCRATE_REGISTRY=https://crates.example.org pkgcrate show
//! ```

mod common;
mod generate;
mod show;

pub use common::CommandContext;
pub use generate::GenerateCommand;
pub use show::ShowCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Tracing filter directive; `None` disables logging.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Install the global tracing subscriber.
    ///
    /// Logs go to stderr without timestamps so they interleave cleanly with the
    /// per-package lines printed on stdout.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Generate package-manager recipes for crates.io packages.
#[derive(Parser)]
#[command(
    name = "pkgcrate",
    about = "Generate PKGBUILD recipes for crates.io packages",
    version,
    author,
    long_about = "pkgcrate reads a list of crates, resolves each one's latest stable version, \
                  license and metadata from crates.io, and renders a recipe template per crate."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve packages and write their recipes
    Generate(GenerateCommand),

    /// Resolve packages and print the resolved metadata
    Show(ShowCommand),
}

impl Cli {
    /// Set up logging and run the selected command.
    pub async fn execute(self) -> Result<()> {
        self.build_config().init_logging();

        match self.command {
            Commands::Generate(cmd) => cmd.execute().await,
            Commands::Show(cmd) => cmd.execute().await,
        }
    }

    /// Derive the [`CliConfig`] from the global flags and `RUST_LOG`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("pkgcrate=debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some(std::env::var("RUST_LOG").unwrap_or_else(|_| "pkgcrate=info".to_string()))
        };

        CliConfig {
            log_level,
        }
    }
}
