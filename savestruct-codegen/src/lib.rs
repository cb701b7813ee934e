//! # savestruct codegen
//!
//! Generates save/read routines for the records of a C header.
//!
//! This crate provides:
//! - A C backend producing `<base>.c`/`<base>.h` for the legacy runtime
//! - A Rust backend producing code for `savestruct-core`
//! - Generator configuration (allow-list, target, type table)
//! - A driver that writes both artifacts atomically

pub mod c;
pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod rust;

pub use config::{GeneratorConfig, Target};
pub use driver::{Written, run, write_atomically};
pub use error::CodegenError;
pub use generator::{Artifact, Artifacts, Backend, GeneratedUnit, Generator};

/// Generates both artifacts from header text.
///
/// # Arguments
/// * `source` - C header content
/// * `base` - Output base name, used for file names and include guards
/// * `config` - Generator settings
#[must_use]
pub fn generate_from_header(source: &str, base: &str, config: &GeneratorConfig) -> Artifacts {
    let ir = savestruct_schema::parse_header(source);
    Generator::new(&ir, config).generate(base)
}

/// Generates both artifacts from a header file, without writing them.
///
/// # Errors
/// Returns `CodegenError` if the file cannot be read.
pub fn generate_from_file(
    path: &std::path::Path,
    base: &str,
    config: &GeneratorConfig,
) -> Result<Artifacts, CodegenError> {
    let ir = savestruct_schema::parse_header_file(path)?;
    Ok(Generator::new(&ir, config).generate(base))
}
