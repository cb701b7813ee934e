//! Intermediate representation for code generation.
//!
//! Records are kept in an insertion-ordered map keyed by name, so iterating
//! the IR always yields records in the order they were declared and repeated
//! runs over the same header produce identical output.

use crate::types::CanonicalType;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// How a record was declared in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordForm {
    /// `typedef struct tag { ... } name;`
    #[default]
    Typedef,
    /// `struct name { ... };`
    Struct,
}

/// A single record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Canonical type.
    pub ty: CanonicalType,
}

impl FieldDef {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: CanonicalType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Returns true if the field is written by save routines.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        !self.ty.is_pointer()
    }
}

/// A record definition extracted from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    /// Record name.
    pub name: String,
    /// Struct tag of a typedef (`gps_s` in `typedef struct gps_s {...} gps;`).
    pub tag: Option<String>,
    /// Declaration form.
    pub form: RecordForm,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// 1-based line of the `struct` keyword.
    pub line: usize,
}

impl RecordDef {
    /// Creates a record.
    #[must_use]
    pub fn new(name: impl Into<String>, form: RecordForm, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            form,
            fields,
            line: 0,
        }
    }

    /// Returns the C spelling of the record type.
    #[must_use]
    pub fn c_type(&self) -> String {
        match self.form {
            RecordForm::Typedef => self.name.clone(),
            RecordForm::Struct => format!("struct {}", self.name),
        }
    }

    /// Iterates over the fields that are persisted.
    pub fn persisted_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_persisted())
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// All records extracted from one header.
///
/// When a name is defined twice the later definition replaces the earlier
/// one but keeps the earlier position.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    records: IndexMap<String, RecordDef>,
    definitions: IndexMap<String, usize>,
    tags: IndexMap<String, String>,
}

impl SchemaIr {
    /// Creates an empty IR.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record.
    ///
    /// Returns the record it replaced, if the name was already defined.
    pub fn insert(&mut self, record: RecordDef) -> Option<RecordDef> {
        if let Some(tag) = &record.tag {
            self.tags.insert(tag.clone(), record.name.clone());
        }
        *self.definitions.entry(record.name.clone()).or_insert(0) += 1;
        match self.records.entry(record.name.clone()) {
            Entry::Occupied(mut slot) => {
                tracing::warn!(
                    "record '{}' redefined at line {} (first at line {}), using the later body",
                    record.name,
                    record.line,
                    slot.get().line
                );
                Some(slot.insert(record))
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                None
            }
        }
    }

    /// Gets a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RecordDef> {
        self.records.get(name)
    }

    /// Resolves a struct tag to the typedef name it was declared with.
    ///
    /// Names that are not a known tag are returned unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        if self.records.contains_key(name) {
            return name;
        }
        self.tags.get(name).map_or(name, String::as_str)
    }

    /// Returns true if a record with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Iterates over records in declaration order.
    pub fn records(&self) -> impl Iterator<Item = &RecordDef> {
        self.records.values()
    }

    /// Iterates over record names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Returns the number of distinct records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns names defined more than once, with their definition count.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.definitions
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(name, count)| (name.as_str(), *count))
    }
}

impl FromIterator<RecordDef> for SchemaIr {
    fn from_iter<I: IntoIterator<Item = RecordDef>>(iter: I) -> Self {
        let mut ir = Self::new();
        for record in iter {
            ir.insert(record);
        }
        ir
    }
}
