//! Struct declarations for the Rust backend.

use super::naming::{const_arg, escape_ident};
use crate::config::GeneratorConfig;
use savestruct_schema::{CanonicalType, RecordDef, SchemaIr};

/// Maps canonical types to Rust type syntax.
pub struct TypeMapper<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Returns the Rust spelling of `ty`.
    ///
    /// Opaque names are looked up in the configured type table first, then
    /// resolved through struct tags to the record they name.
    #[must_use]
    pub fn rust_type(&self, ty: &CanonicalType) -> String {
        match ty {
            CanonicalType::Int(kind) => kind.rust_type().to_string(),
            CanonicalType::String { capacity } => format!(
                "{}::FixedString<{}>",
                self.config.runtime_crate,
                const_arg(capacity)
            ),
            CanonicalType::Pointer(inner) => format!("Option<Box<{}>>", self.rust_type(inner)),
            CanonicalType::Array { element, size } => {
                format!("[{}; {}]", self.rust_type(element), size.trim())
            }
            CanonicalType::Record(name) => match self.config.rust_type_for(name) {
                Some(mapped) => mapped.to_string(),
                None => escape_ident(self.ir.resolve(name)),
            },
        }
    }

    /// Returns the initializer used in the `Default` impl.
    #[must_use]
    pub fn default_value(ty: &CanonicalType) -> &'static str {
        match ty {
            CanonicalType::Array { .. } => "::std::array::from_fn(|_| Default::default())",
            _ => "Default::default()",
        }
    }

    /// Renders the struct and its `Default` impl.
    #[must_use]
    pub fn struct_decl(&self, record: &RecordDef) -> String {
        let mut output = String::new();
        let name = escape_ident(&record.name);

        output.push('\n');
        if record.line > 0 {
            output.push_str(&format!(
                "/// `{}` record, line {} of the source header.\n",
                record.name, record.line
            ));
        } else {
            output.push_str(&format!("/// `{}` record.\n", record.name));
        }
        output.push_str("#[derive(Debug, Clone, PartialEq)]\n");
        output.push_str("#[allow(non_camel_case_types, non_snake_case)]\n");
        output.push_str(&format!("pub struct {} {{\n", name));
        for field in &record.fields {
            output.push_str(&format!(
                "    pub {}: {},\n",
                escape_ident(&field.name),
                self.rust_type(&field.ty)
            ));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl Default for {} {{\n", name));
        output.push_str("    fn default() -> Self {\n");
        output.push_str("        Self {\n");
        for field in &record.fields {
            output.push_str(&format!(
                "            {}: {},\n",
                escape_ident(&field.name),
                Self::default_value(&field.ty)
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savestruct_schema::{IntKind, parse_header};

    #[test]
    fn test_rust_type_mapping() {
        let ir = parse_header("typedef struct enemy_s { int hp; } enemy;\n");
        let config = GeneratorConfig::new().with_rust_type("SDL_Rect", "crate::Rect");
        let mapper = TypeMapper::new(&ir, &config);

        assert_eq!(mapper.rust_type(&CanonicalType::Int(IntKind::U16)), "u16");
        assert_eq!(
            mapper.rust_type(&CanonicalType::String {
                capacity: "MAX_NAME".into()
            }),
            "::savestruct_core::FixedString<{ MAX_NAME }>"
        );
        assert_eq!(
            mapper.rust_type(&CanonicalType::Record("float".into())),
            "f32"
        );
        assert_eq!(
            mapper.rust_type(&CanonicalType::Record("SDL_Rect".into())),
            "crate::Rect"
        );
        assert_eq!(
            mapper.rust_type(&CanonicalType::Pointer(Box::new(CanonicalType::Record(
                "enemy_s".into()
            )))),
            "Option<Box<enemy>>"
        );
        assert_eq!(
            mapper.rust_type(&CanonicalType::Array {
                element: Box::new(CanonicalType::Int(IntKind::I32)),
                size: "MAX_INV".into(),
            }),
            "[i32; MAX_INV]"
        );
    }

    #[test]
    fn test_struct_decl_parses() {
        let ir = parse_header(
            "typedef struct {\n    int type;\n    char name[16];\n    float pos[3];\n    gps *next;\n} gps;\n",
        );
        let config = GeneratorConfig::new();
        let mapper = TypeMapper::new(&ir, &config);
        let decl = mapper.struct_decl(ir.get("gps").expect("gps"));

        assert!(decl.contains("pub struct gps {\n"));
        assert!(decl.contains("    pub r#type: i32,\n"));
        assert!(decl.contains("    pub name: ::savestruct_core::FixedString<16>,\n"));
        assert!(decl.contains("    pub pos: [f32; 3],\n"));
        assert!(decl.contains("    pub next: Option<Box<gps>>,\n"));
        assert!(decl.contains("            pos: ::std::array::from_fn(|_| Default::default()),\n"));
        syn::parse_file(&decl).expect("valid Rust");
    }
}
