//! Selection checks.
//!
//! Nothing here can fail a run. The findings are meant to be logged so that
//! a typo in the allow-list or a record that lost all of its fields to the
//! permissive field grammar does not go unnoticed.

use crate::error::SchemaError;
use crate::ir::SchemaIr;
use crate::selection::SelectionSet;

/// Checks a selection against the extracted records.
///
/// # Arguments
/// * `ir` - Extracted records
/// * `selection` - Allow-list in effect
///
/// # Returns
/// Findings in a stable order: duplicates, then unmatched allow-list
/// entries, then selected records without persisted fields.
#[must_use]
pub fn validate_selection(ir: &SchemaIr, selection: &SelectionSet) -> Vec<SchemaError> {
    let mut issues: Vec<SchemaError> = ir
        .duplicates()
        .filter(|(name, _)| selection.contains(name))
        .map(|(name, count)| SchemaError::DuplicateRecord {
            name: name.to_string(),
            count,
        })
        .collect();

    issues.extend(
        selection
            .iter()
            .filter(|name| !ir.contains(name))
            .map(|name| SchemaError::UnmatchedSelection {
                name: name.to_string(),
            }),
    );

    issues.extend(
        selection
            .select(ir)
            .into_iter()
            .filter(|record| record.persisted_fields().next().is_none())
            .map(|record| SchemaError::EmptyRecord {
                name: record.name.clone(),
            }),
    );

    issues
}
