//! Save/read functions and `Persist` impls for the Rust backend.

use super::naming::escape_ident;
use crate::config::GeneratorConfig;
use savestruct_schema::{CanonicalType, FieldDef, RecordDef, SchemaIr, SelectionSet};

/// Renders the routines of generated records.
pub struct RecordGenerator<'a> {
    ir: &'a SchemaIr,
    selection: SelectionSet,
    runtime: &'a str,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self {
            ir,
            selection: config.selection(),
            runtime: &config.runtime_crate,
        }
    }

    /// Returns the generated record a type name refers to, if any.
    fn generated_record(&self, name: &str) -> Option<&'a str> {
        let resolved = self.ir.resolve(name);
        let record = self.ir.get(resolved)?;
        self.selection
            .contains(&record.name)
            .then_some(record.name.as_str())
    }

    /// Renders `save_<name>`.
    #[must_use]
    pub fn save_function(&self, record: &RecordDef) -> String {
        let mut output = String::new();
        let target = if record.persisted_fields().next().is_some() {
            "target"
        } else {
            "_target"
        };

        output.push_str(&format!("/// Saves a `{}` record under `tag`.\n", record.name));
        output.push_str("#[allow(non_snake_case)]\n");
        output.push_str(&format!(
            "pub fn save_{}(out: &mut {}::TagWriter, tag: &str, {}: &{}) {{\n",
            record.name,
            self.runtime,
            target,
            escape_ident(&record.name)
        ));
        output.push_str("    out.open(tag);\n");
        for field in record.persisted_fields() {
            output.push_str(&self.save_statement(field));
        }
        output.push_str("    out.close(tag);\n");
        output.push_str("}\n");
        output
    }

    /// Renders `read_<name>`.
    #[must_use]
    pub fn read_function(&self, record: &RecordDef) -> String {
        let mut output = String::new();
        let target = if record.fields.is_empty() {
            "_target"
        } else {
            "target"
        };

        output.push_str(&format!(
            "/// Reads the `{}` record tagged `tag` in `buffer` into `target`.\n",
            record.name
        ));
        output.push_str("///\n");
        output.push_str("/// Fields missing from `buffer` keep their value. Pointers are reset.\n");
        output.push_str("///\n");
        output.push_str("/// # Errors\n");
        output.push_str("/// Returns a `ReadError` if the record's tags are missing.\n");
        output.push_str("#[allow(non_snake_case)]\n");
        output.push_str(&format!(
            "pub fn read_{}(buffer: &str, tag: &str, {}: &mut {}) -> {}::ReadResult {{\n",
            record.name,
            target,
            escape_ident(&record.name),
            self.runtime
        ));
        if record.persisted_fields().next().is_some() {
            output.push_str(&format!(
                "    let body = {}::find_container(buffer, tag)?;\n",
                self.runtime
            ));
        } else {
            output.push_str(&format!(
                "    {}::find_container(buffer, tag)?;\n",
                self.runtime
            ));
        }
        for field in &record.fields {
            output.push_str(&self.read_statement(field));
        }
        output.push_str("    Ok(())\n");
        output.push_str("}\n");
        output
    }

    /// Renders the `Persist` impl delegating to the generated functions.
    #[must_use]
    pub fn persist_impl(&self, record: &RecordDef) -> String {
        let mut output = String::new();
        let rt = self.runtime;
        output.push_str(&format!(
            "impl {}::Persist for {} {{\n",
            rt,
            escape_ident(&record.name)
        ));
        output.push_str(&format!(
            "    fn save(&self, out: &mut {}::TagWriter, tag: &str) {{\n",
            rt
        ));
        output.push_str(&format!("        save_{}(out, tag, self);\n", record.name));
        output.push_str("    }\n\n");
        output.push_str(&format!(
            "    fn read(&mut self, buffer: &str, tag: &str) -> {}::ReadResult {{\n",
            rt
        ));
        output.push_str(&format!("        read_{}(buffer, tag, self)\n", record.name));
        output.push_str("    }\n");
        output.push_str("}\n");
        output
    }

    fn save_statement(&self, field: &FieldDef) -> String {
        let rt = self.runtime;
        let tag = &field.name;
        let member = escape_ident(&field.name);
        match &field.ty {
            CanonicalType::Int(kind) => format!(
                "    {rt}::save_{}(out, \"{tag}\", &target.{member});\n",
                kind.rust_type()
            ),
            CanonicalType::String { .. } => {
                format!("    {rt}::save_string(out, \"{tag}\", &target.{member});\n")
            }
            CanonicalType::Array { .. } => {
                format!("    {rt}::save_array(out, \"{tag}\", &target.{member});\n")
            }
            CanonicalType::Record(name) => match self.generated_record(name) {
                Some(record) => format!("    save_{record}(out, \"{tag}\", &target.{member});\n"),
                None => format!("    {rt}::Persist::save(&target.{member}, out, \"{tag}\");\n"),
            },
            CanonicalType::Pointer(_) => String::new(),
        }
    }

    fn read_statement(&self, field: &FieldDef) -> String {
        let rt = self.runtime;
        let tag = &field.name;
        let member = escape_ident(&field.name);
        match &field.ty {
            CanonicalType::Pointer(_) => format!("    target.{member} = None;\n"),
            CanonicalType::Array { .. } if field.ty.is_pointer() => {
                format!("    target.{member}.fill_with(|| None);\n")
            }
            CanonicalType::Int(kind) => format!(
                "    let _ = {rt}::read_{}(body, \"{tag}\", &mut target.{member});\n",
                kind.rust_type()
            ),
            CanonicalType::String { .. } => {
                format!("    let _ = {rt}::read_string(body, \"{tag}\", &mut target.{member});\n")
            }
            CanonicalType::Array { .. } => {
                format!("    let _ = {rt}::read_array(body, \"{tag}\", &mut target.{member});\n")
            }
            CanonicalType::Record(name) => match self.generated_record(name) {
                Some(record) => {
                    format!("    let _ = read_{record}(body, \"{tag}\", &mut target.{member});\n")
                }
                None => format!(
                    "    let _ = {rt}::Persist::read(&mut target.{member}, body, \"{tag}\");\n"
                ),
            },
        }
    }
}
