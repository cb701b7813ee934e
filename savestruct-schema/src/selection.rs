//! Allow-list selection of records.

use crate::ir::{RecordDef, SchemaIr};
use indexmap::IndexSet;

/// Records the save game code has always been generated for.
pub const LEGACY_ALLOW_LIST: &[&str] = &[
    "gps",
    "point",
    "moderately_finepoint",
    "finepoint",
    "tux_t",
    "item",
    "enemy",
    "bullet",
    "melee_shot",
    "mission",
    "configuration_for_freedroid",
    "npc",
    "upgrade_socket",
];

/// Set of record names approved for code generation.
///
/// Selection never changes the order of records: the result of
/// [`SelectionSet::select`] follows the header, not the allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: IndexSet<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the legacy save game selection.
    #[must_use]
    pub fn legacy() -> Self {
        LEGACY_ALLOW_LIST.iter().copied().collect()
    }

    /// Adds a name to the selection.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Returns true if `name` is selected.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of selected names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the selected names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the records of `ir` that are selected, in declaration order.
    #[must_use]
    pub fn select<'a>(&self, ir: &'a SchemaIr) -> Vec<&'a RecordDef> {
        ir.records().filter(|r| self.contains(&r.name)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for SelectionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
