//! # Savestruct Schema
//!
//! Record extraction from C headers.
//!
//! This crate provides:
//! - Comment stripping that keeps line structure intact
//! - Extraction of `typedef struct` and bare `struct` definitions
//! - Field parsing and type canonicalization
//! - An ordered intermediate representation for code generation
//! - Allow-list selection of the records to generate code for

pub mod error;
pub mod ir;
pub mod parser;
pub mod scanner;
pub mod selection;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{FieldDef, RecordDef, RecordForm, SchemaIr};
pub use parser::{extract_records, parse_field_line, parse_fields, parse_header, RawRecord};
pub use scanner::{strip_comments, CommentScanner};
pub use selection::{SelectionSet, LEGACY_ALLOW_LIST};
pub use types::{CanonicalType, IntKind};
pub use validation::validate_selection;

/// Reads and parses a C header file.
///
/// # Arguments
/// * `path` - Path to the header
///
/// # Returns
/// The records found in the header, in declaration order.
///
/// # Errors
/// Returns `ParseError::Read` if the file cannot be read. Malformed record
/// bodies never produce an error.
pub fn parse_header_file(path: &std::path::Path) -> Result<SchemaIr, ParseError> {
    let source = std::fs::read_to_string(path).map_err(|e| ParseError::read(path, e))?;
    Ok(parse_header(&source))
}
