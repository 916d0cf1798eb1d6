//! Batch classification result table.

use serde::{Deserialize, Serialize};

/// One classified input code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComorbidityRow {
    /// The code exactly as supplied by the caller.
    pub icd_code: String,
    /// Matched categories in match order; empty means no recognized
    /// comorbidity for this code under the chosen taxonomy/version.
    pub categories: Vec<String>,
}

/// Two-column result of a batch classification: one row per input code,
/// in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComorbidityTable {
    /// Mapping label the table was built with ("charlson", "elixhauser",
    /// or "custom"); determines the categories column name.
    pub mapping: String,
    pub rows: Vec<ComorbidityRow>,
}

impl ComorbidityTable {
    pub fn new(mapping: impl Into<String>) -> Self {
        Self {
            mapping: mapping.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: ComorbidityRow) {
        self.rows.push(row);
    }

    /// Name of the categories column (e.g., "elixhauser_comorbidity").
    pub fn column_name(&self) -> String {
        format!("{}_comorbidity", self.mapping)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
