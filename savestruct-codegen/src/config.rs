//! Generator configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! reproduces the legacy behaviour: C output for the baked-in allow-list.

use savestruct_schema::{LEGACY_ALLOW_LIST, SelectionSet};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// `<base>.c` and `<base>.h` for the legacy C runtime.
    #[default]
    C,
    /// `<base>.rs` and `<base>_types.rs` for `savestruct-core`.
    Rust,
}

impl Target {
    /// Returns the lowercase name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Rust => "rust",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "rust" | "rs" => Ok(Self::Rust),
            other => Err(format!("unknown target '{}' (expected 'c' or 'rust')", other)),
        }
    }
}

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Names of the records to generate code for.
    pub allow_list: Vec<String>,
    /// Output language.
    pub target: Target,
    /// Headers included by the C implementation before its own header.
    pub c_includes: Vec<String>,
    /// Rust spellings for opaque C type names, on top of the built-in ones.
    pub rust_types: BTreeMap<String, String>,
    /// Path of the runtime crate referenced by generated Rust.
    pub runtime_crate: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            allow_list: LEGACY_ALLOW_LIST.iter().map(|s| (*s).to_string()).collect(),
            target: Target::default(),
            c_includes: vec![
                "struct.h".to_string(),
                "global.h".to_string(),
                "proto.h".to_string(),
            ],
            rust_types: BTreeMap::new(),
            runtime_crate: "::savestruct_core".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output language.
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Replaces the allow-list.
    #[must_use]
    pub fn with_allow_list<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds or overrides a Rust spelling for an opaque C type.
    #[must_use]
    pub fn with_rust_type(mut self, c_name: impl Into<String>, rust: impl Into<String>) -> Self {
        self.rust_types.insert(c_name.into(), rust.into());
        self
    }

    /// Builds the selection set from the allow-list.
    #[must_use]
    pub fn selection(&self) -> SelectionSet {
        self.allow_list.iter().cloned().collect()
    }

    /// Looks up the Rust spelling of an opaque C type name.
    ///
    /// User entries take precedence over the built-in table.
    #[must_use]
    pub fn rust_type_for(&self, c_name: &str) -> Option<&str> {
        self.rust_types
            .get(c_name)
            .map(String::as_str)
            .or_else(|| builtin_rust_type(c_name))
    }
}

/// Built-in Rust spellings for C names outside the integer table.
fn builtin_rust_type(c_name: &str) -> Option<&'static str> {
    let rust = match c_name {
        "float" => "f32",
        "double" => "f64",
        "char" => "i8",
        "bool" | "_Bool" => "bool",
        "void" => "()",
        "uchar" | "Uint8" | "uint8_t" => "u8",
        "Sint8" | "int8_t" => "i8",
        "Uint16" | "uint16_t" => "u16",
        "Sint16" | "int16_t" => "i16",
        "Uint32" | "uint32_t" => "u32",
        "Sint32" | "int32_t" => "i32",
        "uint64_t" | "Uint64" => "u64",
        "int64_t" | "Sint64" => "i64",
        "size_t" => "usize",
        _ => return None,
    };
    Some(rust)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_legacy() {
        let config = GeneratorConfig::default();
        assert_eq!(config.target, Target::C);
        assert_eq!(config.allow_list.len(), LEGACY_ALLOW_LIST.len());
        assert!(config.selection().contains("tux_t"));
        assert_eq!(config.runtime_crate, "::savestruct_core");
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!("c".parse::<Target>(), Ok(Target::C));
        assert_eq!("Rust".parse::<Target>(), Ok(Target::Rust));
        assert!("java".parse::<Target>().is_err());
        assert_eq!(Target::Rust.to_string(), "rust");
    }

    #[test]
    fn test_rust_type_lookup() {
        let config = GeneratorConfig::new()
            .with_rust_type("float", "f64")
            .with_rust_type("SDL_Rect", "crate::Rect");
        assert_eq!(config.rust_type_for("float"), Some("f64"));
        assert_eq!(config.rust_type_for("SDL_Rect"), Some("crate::Rect"));
        assert_eq!(config.rust_type_for("double"), Some("f64"));
        assert_eq!(config.rust_type_for("gps"), None);
    }

    #[test]
    fn test_from_toml_partial() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            target = "rust"
            allow_list = ["gps", "item"]

            [rust_types]
            Uint8 = "u16"
            "#,
        )
        .expect("parse");
        assert_eq!(config.target, Target::Rust);
        assert_eq!(config.allow_list, vec!["gps", "item"]);
        assert_eq!(config.rust_type_for("Uint8"), Some("u16"));
        assert_eq!(config.rust_type_for("float"), Some("f32"));
        assert_eq!(config.c_includes, GeneratorConfig::default().c_includes);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        assert!(toml::from_str::<GeneratorConfig>("allowlist = []").is_err());
    }
}
