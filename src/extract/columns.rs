// src/extract/columns.rs

use crate::tree::Column;

/// Semantic column looked up in a grid: the human label it should carry,
/// plus the stable property name that survives label renames and
/// localization.
pub struct ColumnSpec {
    pub label: &'static str,
    pub property_name: &'static str,
}

/// Resolve a spec to this load's column id.
///
/// Label equality is checked across all descriptors before the
/// property-name fallback is tried at all, so a label match wins even
/// when a property-name match appears earlier in the list.
pub fn resolve<'c>(columns: &'c [Column], spec: &ColumnSpec) -> Option<&'c str> {
    columns
        .iter()
        .find(|c| c.label.as_deref() == Some(spec.label))
        .or_else(|| {
            columns
                .iter()
                .find(|c| c.property_name.as_deref() == Some(spec.property_name))
        })?
        .column_id
        .as_deref()
}
