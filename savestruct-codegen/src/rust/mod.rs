//! Rust code generation backed by `savestruct-core`.
//!
//! The interface artifact holds one struct per record, the implementation
//! artifact the `save_<name>`/`read_<name>` functions and `Persist` impls.
//! Both are meant to be pulled into the same module with `include!`, next
//! to `usize` constants for every symbolic array size:
//!
//! ```ignore
//! pub const MAX_NAME: usize = 20;
//! include!(concat!(env!("OUT_DIR"), "/savegame_types.rs"));
//! include!(concat!(env!("OUT_DIR"), "/savegame.rs"));
//! ```

pub mod naming;
pub mod records;
pub mod types;

pub use records::RecordGenerator;
pub use types::TypeMapper;

use crate::config::GeneratorConfig;
use crate::generator::{BANNER, Backend, GeneratedUnit};
use savestruct_schema::{RecordDef, SchemaIr};

/// Backend producing `<base>.rs` and `<base>_types.rs`.
pub struct RustBackend<'a> {
    types: TypeMapper<'a>,
    records: RecordGenerator<'a>,
}

impl<'a> RustBackend<'a> {
    /// Creates a new Rust backend.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self {
            types: TypeMapper::new(ir, config),
            records: RecordGenerator::new(ir, config),
        }
    }
}

impl Backend for RustBackend<'_> {
    fn interface_file(&self, base: &str) -> String {
        format!("{}_types.rs", base)
    }

    fn implementation_file(&self, base: &str) -> String {
        format!("{}.rs", base)
    }

    fn interface_prelude(&self, _base: &str) -> String {
        format!("// {}\n", BANNER)
    }

    fn implementation_prelude(&self, _base: &str) -> String {
        format!("// {}\n", BANNER)
    }

    fn unit(&self, record: &RecordDef) -> GeneratedUnit {
        GeneratedUnit {
            record: record.name.clone(),
            declarations: self.types.struct_decl(record),
            save_body: self.records.save_function(record),
            read_body: self.records.read_function(record),
            trait_impls: self.records.persist_impl(record),
        }
    }
}
