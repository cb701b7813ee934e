//! Configuration loading and command-line overrides.

use crate::Args;
use anyhow::{Context, Result};
use savestruct_codegen::GeneratorConfig;
use std::path::Path;

/// Builds the generator configuration for a run.
///
/// Starts from the `--config` file if given, else the defaults, then applies
/// `--target` and `--allow`.
pub fn load(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => from_file(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(target) = args.target {
        config.target = target;
    }
    if !args.allow.is_empty() {
        config.allow_list = args.allow.clone();
    }

    tracing::debug!(
        "target {}, {} allow-listed records",
        config.target,
        config.allow_list.len()
    );
    Ok(config)
}

/// Reads a TOML configuration file.
pub fn from_file(path: &Path) -> Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use savestruct_codegen::Target;
    use std::fs;

    #[test]
    fn test_defaults_without_file() {
        let args = Args::try_parse_from(["gen-savestruct", "in.h", "out"]).expect("parse");
        assert_eq!(load(&args).expect("load"), GeneratorConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("savestruct.toml");
        fs::write(
            &path,
            "target = \"rust\"\nallow_list = [\"gps\"]\nc_includes = [\"game.h\"]\n",
        )
        .expect("write");

        let config_arg = path.to_string_lossy().into_owned();
        let args = Args::try_parse_from([
            "gen-savestruct",
            "in.h",
            "out",
            "--config",
            config_arg.as_str(),
            "--allow",
            "item",
            "--target",
            "c",
        ])
        .expect("parse");

        let config = load(&args).expect("load");
        assert_eq!(config.target, Target::C);
        assert_eq!(config.allow_list, vec!["item"]);
        assert_eq!(config.c_includes, vec!["game.h"]);
    }

    #[test]
    fn test_missing_config_file() {
        let err = from_file(Path::new("/nonexistent/savestruct.toml")).expect_err("missing");
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "target = \"cobol\"\n").expect("write");
        let err = from_file(&path).expect_err("invalid");
        assert!(err.to_string().contains("invalid config file"));
    }
}
