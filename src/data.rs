//! Data structures for tabular export input.
//!
//! This module defines the core data structures used throughout the `signoff`
//! application for representing the tabular data handed to the export
//! renderers by a calling view or by the CLI.

use anyhow::{Result, bail};

/// A tabular dataset: ordered column headers plus ordered rows of string
/// cells, each row as wide as the header list.
///
/// # Fields
/// * `headers` - Ordered column header strings
/// * `rows` - Ordered rows; each row is an ordered list of string cells
///
/// The dataset is read-only input to the renderers: it is borrowed, never
/// mutated, and carries no identity beyond positional order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Creates a dataset from headers and rows.
    ///
    /// # Arguments
    /// * `headers` - Column header strings
    /// * `rows` - Row data, each row matching the header count
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Dataset { headers, rows }
    }

    /// Checks that every row has exactly as many cells as there are headers.
    ///
    /// # Returns
    /// * `Result<()>` - Ok for a well-formed dataset, Err naming the first
    ///   ragged row otherwise
    pub fn validate(&self) -> Result<()> {
        let width = self.headers.len();
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != width {
                bail!(
                    "Row {} has {} cell(s), expected {} (one per header)",
                    i,
                    row.len(),
                    width
                );
            }
        }
        Ok(())
    }

    /// Number of columns (header count).
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (headers excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new(
            strings(&["Employee", "Hours"]),
            vec![strings(&["Ada", "7.5"]), strings(&["Grace", "8"])],
        );

        assert_eq!(dataset.column_count(), 2);
        assert_eq!(dataset.row_count(), 2);
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ragged_rows() {
        let dataset = Dataset::new(
            strings(&["Employee", "Hours"]),
            vec![strings(&["Ada", "7.5"]), strings(&["Grace"])],
        );

        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("Row 1"));
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let dataset = Dataset::new(strings(&["Employee"]), vec![]);
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.row_count(), 0);
    }

    #[test]
    fn test_dataset_deserializes_from_json() {
        let json = r#"{"headers": ["A", "B"], "rows": [["1", "2"]]}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.headers, vec!["A", "B"]);
        assert_eq!(dataset.rows, vec![vec!["1", "2"]]);
    }
}
