//! # savestruct
//!
//! Save/read code generation for the record definitions of a C header.
//!
//! A header is scanned for `typedef struct { ... } name;` and
//! `struct name { ... };` definitions. For each record on the allow-list a
//! save routine writes the record as tag-delimited text and a read routine
//! decodes it again:
//!
//! ```text
//! <tux>
//! <level>3</level>
//! <name>Tux</name>
//! </tux>
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use savestruct::prelude::*;
//!
//! let header = "typedef struct {\n    int x;\n    int y;\n} point;\n";
//! let config = GeneratorConfig::new().with_target(Target::Rust);
//! let artifacts = generate_from_header(header, "savegame", &config);
//!
//! assert_eq!(artifacts.records, vec!["point"]);
//! assert!(artifacts.implementation.contents.contains("pub fn save_point("));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Runtime used by generated Rust code
//! - [`schema`] - Record extraction and type canonicalization
//! - [`codegen`] - C and Rust backends, configuration, driver

pub mod prelude;

/// Runtime for generated Rust code.
pub mod core {
    pub use savestruct_core::*;
}

/// Record extraction and type canonicalization.
pub mod schema {
    pub use savestruct_schema::*;
}

/// Code generation from extracted records.
pub mod codegen {
    pub use savestruct_codegen::*;
}
