//! C code generation for the legacy runtime.
//!
//! Save routines append to the `savestruct_autostr` buffer through
//! `autostr_append`. Read routines NUL-terminate the record's container in
//! place while decoding its fields and restore the byte before returning.
//! They return 0 on success, 1 if the start tag is missing and 2 if the end
//! tag is missing. Field routines (`save_int32_t`, `read_string`,
//! `save_float_array`, ...) are expected to exist in the hand-written
//! runtime.

use crate::config::GeneratorConfig;
use crate::generator::{BANNER, Backend, GeneratedUnit};
use savestruct_schema::{CanonicalType, FieldDef, RecordDef};

/// Backend producing `<base>.c` and `<base>.h`.
pub struct CBackend<'a> {
    includes: &'a [String],
}

impl<'a> CBackend<'a> {
    /// Creates a new C backend.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            includes: &config.c_includes,
        }
    }

    fn save_function(&self, record: &RecordDef) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "int save_{}(char *tag, {} *target)\n{{\n",
            record.name,
            record.c_type()
        ));
        output.push_str("\tautostr_append(savestruct_autostr, \"<%s>\\n\", tag);\n");
        for field in record.persisted_fields() {
            output.push_str(&save_call(field));
        }
        output.push_str("\tautostr_append(savestruct_autostr, \"</%s>\\n\", tag);\n");
        output.push_str("\treturn 0;\n");
        output.push_str("}\n");
        output
    }

    fn read_function(&self, record: &RecordDef) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "int read_{}(char *buffer, char *tag, {} *target)\n{{\n",
            record.name,
            record.c_type()
        ));
        output.push_str("\tchar search[strlen(tag) + 5];\n");
        output.push_str("\tsprintf(search, \"<%s>\", tag);\n");
        output.push_str("\tchar *pos = strstr(buffer, search);\n");
        output.push_str("\tif (!pos)\n\t\treturn 1;\n");
        output.push_str("\tpos += strlen(search);\n");
        output.push_str("\tsprintf(search, \"</%s>\", tag);\n");
        output.push_str("\tchar *epos = strstr(pos, search);\n");
        output.push_str("\tif (!epos)\n\t\treturn 2;\n");
        output.push_str("\t*epos = '\\0';\n\n");
        for field in &record.fields {
            output.push_str(&read_call(field));
        }
        output.push_str("\n\t*epos = '<';\n");
        output.push_str("\treturn 0;\n");
        output.push_str("}\n");
        output
    }
}

impl Backend for CBackend<'_> {
    fn interface_file(&self, base: &str) -> String {
        format!("{}.h", base)
    }

    fn implementation_file(&self, base: &str) -> String {
        format!("{}.c", base)
    }

    fn interface_prelude(&self, base: &str) -> String {
        let guard = include_guard(base);
        format!("/* {} */\n\n#ifndef {}\n#define {}\n\n", BANNER, guard, guard)
    }

    fn interface_epilogue(&self, base: &str) -> String {
        format!("\n#endif /* {} */\n", include_guard(base))
    }

    fn implementation_prelude(&self, base: &str) -> String {
        let mut output = format!("/* {} */\n\n", BANNER);
        output.push_str("#include <stdio.h>\n");
        output.push_str("#include <string.h>\n");
        for include in self.includes {
            output.push_str(&include_line(include));
        }
        output.push_str(&include_line(&self.interface_file(base)));
        output
    }

    fn unit(&self, record: &RecordDef) -> GeneratedUnit {
        let c_type = record.c_type();
        GeneratedUnit {
            record: record.name.clone(),
            declarations: format!(
                "int save_{name}(char *, {ty} *);\nint read_{name}(char *, char *, {ty} *);\n",
                name = record.name,
                ty = c_type
            ),
            save_body: self.save_function(record),
            read_body: self.read_function(record),
            trait_impls: String::new(),
        }
    }
}

/// Returns the save statement for a persisted field.
fn save_call(field: &FieldDef) -> String {
    let name = &field.name;
    match &field.ty {
        CanonicalType::String { capacity } => {
            format!("\tsave_string(\"{name}\", target->{name}, {capacity});\n")
        }
        CanonicalType::Array { element, size } => format!(
            "\tsave_{}_array(\"{name}\", target->{name}, {size});\n",
            element.kind_name()
        ),
        other => format!("\tsave_{}(\"{name}\", &(target->{name}));\n", other.kind_name()),
    }
}

/// Returns the read statement for a field, or the reset for a pointer.
fn read_call(field: &FieldDef) -> String {
    let name = &field.name;
    match &field.ty {
        CanonicalType::Pointer(_) => format!("\ttarget->{name} = NULL;\n"),
        CanonicalType::Array { size, .. } if field.ty.is_pointer() => format!(
            "\tmemset(target->{name}, 0, ({size}) * sizeof(target->{name}[0]));\n"
        ),
        CanonicalType::String { capacity } => {
            format!("\tread_string(pos, \"{name}\", target->{name}, {capacity});\n")
        }
        CanonicalType::Array { element, size } => format!(
            "\tread_{}_array(pos, \"{name}\", target->{name}, {size});\n",
            element.kind_name()
        ),
        other => format!("\tread_{}(pos, \"{name}\", &(target->{name}));\n", other.kind_name()),
    }
}

fn include_line(header: &str) -> String {
    if header.starts_with('<') {
        format!("#include {}\n", header)
    } else {
        format!("#include \"{}\"\n", header)
    }
}

/// Derives an include guard macro from the output base name.
fn include_guard(base: &str) -> String {
    let mut guard: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if guard.starts_with(|c: char| c.is_ascii_digit() || c == '_') {
        guard.insert_str(0, "GEN");
        if !guard[3..].starts_with('_') {
            guard.insert(3, '_');
        }
    }
    guard.push_str("_H");
    guard
}
