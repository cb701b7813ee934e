//! Backend-independent generation pipeline.

use crate::c::CBackend;
use crate::config::{GeneratorConfig, Target};
use crate::rust::RustBackend;
use savestruct_schema::{RecordDef, SchemaIr};

/// Text of the banner placed at the top of every artifact.
pub const BANNER: &str = "Generated by gen-savestruct. Do not edit.";

/// Generated code for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Record name.
    pub record: String,
    /// Text for the interface artifact.
    pub declarations: String,
    /// Save routine.
    pub save_body: String,
    /// Read routine.
    pub read_body: String,
    /// Trait impls tying the record to the runtime. Empty for C.
    pub trait_impls: String,
}

/// One output file, fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name, without directory.
    pub file_name: String,
    /// File contents.
    pub contents: String,
}

/// The two artifacts of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Declarations (`.h` or `_types.rs`).
    pub interface: Artifact,
    /// Save/read bodies (`.c` or `.rs`).
    pub implementation: Artifact,
    /// Names of the records that were generated, in output order.
    pub records: Vec<String>,
}

/// A target language.
///
/// Backends render single records; the [`Generator`] assembles the units
/// into artifacts.
pub trait Backend {
    /// Returns the interface file name for `base`.
    fn interface_file(&self, base: &str) -> String;

    /// Returns the implementation file name for `base`.
    fn implementation_file(&self, base: &str) -> String;

    /// Text placed before the declarations.
    fn interface_prelude(&self, base: &str) -> String;

    /// Text placed after the declarations.
    fn interface_epilogue(&self, _base: &str) -> String {
        String::new()
    }

    /// Text placed before the save/read bodies.
    fn implementation_prelude(&self, base: &str) -> String;

    /// Renders one record.
    fn unit(&self, record: &RecordDef) -> GeneratedUnit;
}

/// Generates save/read code for the selected records of an IR.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Returns the records that receive code, in declaration order.
    #[must_use]
    pub fn selected(&self) -> Vec<&'a RecordDef> {
        self.config.selection().select(self.ir)
    }

    /// Renders one unit per selected record.
    #[must_use]
    pub fn units(&self) -> Vec<GeneratedUnit> {
        let backend = self.backend();
        self.selected()
            .into_iter()
            .map(|record| {
                tracing::debug!(
                    "generating {} code for record '{}' ({} fields)",
                    self.config.target,
                    record.name,
                    record.fields.len()
                );
                backend.unit(record)
            })
            .collect()
    }

    /// Renders both artifacts.
    ///
    /// # Arguments
    /// * `base` - Output base name without directory, used for file names
    ///   and include guards
    #[must_use]
    pub fn generate(&self, base: &str) -> Artifacts {
        let backend = self.backend();
        let units = self.units();

        let mut interface = backend.interface_prelude(base);
        let mut implementation = backend.implementation_prelude(base);
        for unit in &units {
            interface.push_str(&unit.declarations);

            implementation.push('\n');
            implementation.push_str(&unit.save_body);
            implementation.push('\n');
            implementation.push_str(&unit.read_body);
            if !unit.trait_impls.is_empty() {
                implementation.push('\n');
                implementation.push_str(&unit.trait_impls);
            }
        }
        interface.push_str(&backend.interface_epilogue(base));

        Artifacts {
            interface: Artifact {
                file_name: backend.interface_file(base),
                contents: interface,
            },
            implementation: Artifact {
                file_name: backend.implementation_file(base),
                contents: implementation,
            },
            records: units.into_iter().map(|u| u.record).collect(),
        }
    }

    fn backend(&self) -> Box<dyn Backend + 'a> {
        match self.config.target {
            Target::C => Box::new(CBackend::new(self.config)),
            Target::Rust => Box::new(RustBackend::new(self.ir, self.config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savestruct_schema::parse_header;

    const HEADER: &str = r#"
typedef struct { int a; } A;
typedef struct { int b; } B;
typedef struct { int c; } C;
"#;

    #[test]
    fn test_selection_filter_order() {
        let ir = parse_header(HEADER);
        let config = GeneratorConfig::new().with_allow_list(["C", "A"]);
        let units = Generator::new(&ir, &config).units();
        let names: Vec<_> = units.iter().map(|u| u.record.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_unselected_records_ignored() {
        let ir = parse_header(HEADER);
        let config = GeneratorConfig::new().with_allow_list(["missing"]);
        let artifacts = Generator::new(&ir, &config).generate("out");
        assert!(artifacts.records.is_empty());
        assert!(!artifacts.implementation.contents.contains("save_A"));
    }

    #[test]
    fn test_file_names_per_target() {
        let ir = parse_header(HEADER);
        let c = GeneratorConfig::new();
        let rust = GeneratorConfig::new().with_target(Target::Rust);

        let artifacts = Generator::new(&ir, &c).generate("savegame");
        assert_eq!(artifacts.interface.file_name, "savegame.h");
        assert_eq!(artifacts.implementation.file_name, "savegame.c");

        let artifacts = Generator::new(&ir, &rust).generate("savegame");
        assert_eq!(artifacts.interface.file_name, "savegame_types.rs");
        assert_eq!(artifacts.implementation.file_name, "savegame.rs");
    }

    #[test]
    fn test_output_is_deterministic() {
        let ir = parse_header(HEADER);
        for target in [Target::C, Target::Rust] {
            let config = GeneratorConfig::new()
                .with_target(target)
                .with_allow_list(["A", "B", "C"]);
            let first = Generator::new(&ir, &config).generate("x");
            let second = Generator::new(&parse_header(HEADER), &config).generate("x");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_banner_in_both_artifacts() {
        let ir = parse_header(HEADER);
        for target in [Target::C, Target::Rust] {
            let config = GeneratorConfig::new().with_target(target);
            let artifacts = Generator::new(&ir, &config).generate("x");
            assert!(artifacts.interface.contents.contains(BANNER));
            assert!(artifacts.implementation.contents.contains(BANNER));
        }
    }
}
