//! gen-savestruct
//!
//! Reads a C header, picks the allow-listed record definitions and writes
//! save/read routines for them as `<base>.c`/`<base>.h` or, with
//! `--target rust`, as `<base>.rs`/`<base>_types.rs`.

use anyhow::{Context, Result};
use clap::Parser;
use savestruct_codegen::Target;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[derive(Parser, Debug)]
#[command(name = "gen-savestruct")]
#[command(about = "Generate save/read routines from C record definitions", long_about = None)]
#[command(version)]
struct Args {
    /// C header containing the record definitions
    input: PathBuf,

    /// Output path without extension (e.g. "src/savegame")
    output_base: PathBuf,

    /// Output language: "c" or "rust" (default: from config, else c)
    #[arg(short, long)]
    target: Option<Target>,

    /// Record to generate; repeat to list several. Replaces the configured allow-list
    #[arg(short, long = "allow", value_name = "NAME")]
    allow: Vec<String>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = config::load(&args)?;
    let written = savestruct_codegen::run(&args.input, &args.output_base, &config)
        .with_context(|| format!("failed to generate code for {}", args.input.display()))?;

    info!(
        "generated {} records: {}",
        written.records.len(),
        written.records.join(", ")
    );
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["gen-savestruct", "struct.h", "out/savegame"])
            .expect("parse");
        assert_eq!(args.input, PathBuf::from("struct.h"));
        assert_eq!(args.output_base, PathBuf::from("out/savegame"));
        assert_eq!(args.target, None);
        assert!(args.allow.is_empty());
        assert!(!args.verbose);
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "gen-savestruct",
            "struct.h",
            "savegame",
            "--target",
            "rust",
            "--allow",
            "gps",
            "-a",
            "item",
            "-v",
        ])
        .expect("parse");
        assert_eq!(args.target, Some(Target::Rust));
        assert_eq!(args.allow, vec!["gps", "item"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        let err = Args::try_parse_from(["gen-savestruct", "struct.h"]).expect_err("missing base");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);

        let err = Args::try_parse_from(["gen-savestruct", "a", "b", "c"]).expect_err("extra");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_target_rejected() {
        assert!(Args::try_parse_from(["gen-savestruct", "a", "b", "--target", "java"]).is_err());
    }
}
