//! sf2-catalog - SoundFont catalog generator CLI
//!
//! Scans a directory for `.sf2` banks, emits one Swift declaration file per
//! bank, and splices the registration table into the aggregate
//! `SoundFont.swift` file between its sentinel comments.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sf2-catalog")]
#[command(about = "Generate Swift patch declarations from SoundFont banks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where the aggregate registry lives relative to the bank directory
const DEFAULT_TARGET: &str = "../SynthInC/SoundFont.swift";

#[derive(Subcommand)]
enum Commands {
    /// Generate declaration files and weave the registration table
    Generate {
        /// Directory scanned for .sf2 input files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Directory the declaration files are written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Aggregate file carrying the sentinel-delimited registry
        #[arg(short, long, default_value = DEFAULT_TARGET)]
        target: PathBuf,
    },

    /// Check that generated files are in sync with the .sf2 inputs
    Check {
        /// Directory scanned for .sf2 input files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Directory holding the generated declaration files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Aggregate file carrying the sentinel-delimited registry
        #[arg(short, long, default_value = DEFAULT_TARGET)]
        target: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    // A bare invocation generates with the defaults, like the original
    // flagless tool
    let command = cli.command.unwrap_or(Commands::Generate {
        dir: PathBuf::from("."),
        output: PathBuf::from("."),
        target: PathBuf::from(DEFAULT_TARGET),
    });

    match command {
        Commands::Generate {
            dir,
            output,
            target,
        } => {
            sf2_catalog::generate(&dir, &output, &target)?;
            tracing::info!("catalog generated");
        }

        Commands::Check {
            dir,
            output,
            target,
        } => {
            if !sf2_catalog::check(&dir, &output, &target)? {
                anyhow::bail!("catalog is out of sync; run 'sf2-catalog generate' to regenerate");
            }
            tracing::info!("catalog is in sync");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["sf2-catalog"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_subcommand_parses() {
        let cli =
            Cli::try_parse_from(["sf2-catalog", "generate", "banks", "--target", "SF.swift"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Generate { .. })));
    }

    #[test]
    fn test_check_subcommand_parses() {
        let cli = Cli::try_parse_from(["sf2-catalog", "check"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
    }
}
