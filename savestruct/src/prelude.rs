//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use savestruct::prelude::*;
//! ```

// Runtime
pub use savestruct_core::{FixedString, Persist, ReadError, ReadResult, TagWriter, to_container};

// Schema
pub use savestruct_schema::{CanonicalType, RecordDef, SchemaIr, SelectionSet, parse_header};

// Codegen
pub use savestruct_codegen::{
    Artifacts, CodegenError, GeneratorConfig, Target, generate_from_file, generate_from_header,
    run,
};
