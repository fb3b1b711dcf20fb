//! Data model for Jupyter notebook documents (nbformat 4.x).
//!
//! The model is deliberately loose: only the fields this crate needs to
//! inspect or mutate are typed, and everything else is captured through
//! `#[serde(flatten)]` so a parse/serialize round trip loses nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key holding interactive widget state.
///
/// Widget state saved by old ipywidgets versions is frequently corrupt and
/// breaks notebook rendering, which is why this crate exists.
pub const WIDGETS_KEY: &str = "widgets";

/// A parsed Jupyter notebook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Ordered list of cells in the notebook
    pub cells: Vec<Cell>,

    /// Document-level metadata (kernelspec, language_info, ...).
    /// Passed through untouched.
    #[serde(default)]
    pub metadata: Map<String, Value>,

    /// nbformat major version
    pub nbformat: u64,

    /// nbformat minor version
    pub nbformat_minor: u64,

    /// Any other top-level fields, preserved verbatim
    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

/// Individual notebook cell.
///
/// Only `metadata` is typed; `cell_type`, `source`, `outputs`,
/// `execution_count`, `id` and anything else a kernel or frontend stashed
/// on the cell ride along in `fields` and are never modified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell-level metadata mapping; heterogeneous, loosely typed values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,

    /// All remaining cell fields, preserved verbatim
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Cell {
    /// Cell type string (`code`, `markdown`, `raw`), if present
    #[must_use]
    pub fn cell_type(&self) -> Option<&str> {
        self.fields.get("cell_type").and_then(Value::as_str)
    }

    /// Whether this cell's metadata mapping carries the `widgets` key
    #[must_use]
    pub fn has_widget_metadata(&self) -> bool {
        self.metadata
            .as_ref()
            .is_some_and(|m| m.contains_key(WIDGETS_KEY))
    }
}

/// Summary of a notebook's structure, for inspection without cleaning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotebookSummary {
    /// nbformat major version
    pub nbformat: u64,
    /// nbformat minor version
    pub nbformat_minor: u64,
    /// Total number of cells
    pub total_cells: usize,
    /// Number of code cells
    pub code_cells: usize,
    /// Number of markdown cells
    pub markdown_cells: usize,
    /// Number of raw cells
    pub raw_cells: usize,
    /// Number of cells whose metadata carries the `widgets` key
    pub widget_cells: usize,
}

impl Notebook {
    /// Summarize the notebook's structure
    #[must_use]
    pub fn summarize(&self) -> NotebookSummary {
        let mut summary = NotebookSummary {
            nbformat: self.nbformat,
            nbformat_minor: self.nbformat_minor,
            total_cells: self.cells.len(),
            ..NotebookSummary::default()
        };

        for cell in &self.cells {
            match cell.cell_type() {
                Some("code") => summary.code_cells += 1,
                Some("markdown") => summary.markdown_cells += 1,
                Some("raw") => summary.raw_cells += 1,
                _ => {}
            }
            if cell.has_widget_metadata() {
                summary.widget_cells += 1;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_type_lookup() {
        let cell: Cell = serde_json::from_value(json!({
            "cell_type": "markdown",
            "metadata": {},
            "source": ["# Title"]
        }))
        .unwrap();
        assert_eq!(cell.cell_type(), Some("markdown"));
    }

    #[test]
    fn test_has_widget_metadata() {
        let with_widgets: Cell = serde_json::from_value(json!({
            "cell_type": "code",
            "metadata": {"widgets": {"state": {}}},
            "source": []
        }))
        .unwrap();
        assert!(with_widgets.has_widget_metadata());

        let without: Cell = serde_json::from_value(json!({
            "cell_type": "code",
            "metadata": {"tags": ["a"]},
            "source": []
        }))
        .unwrap();
        assert!(!without.has_widget_metadata());

        let no_metadata: Cell = serde_json::from_value(json!({
            "cell_type": "raw",
            "source": []
        }))
        .unwrap();
        assert!(no_metadata.metadata.is_none());
        assert!(!no_metadata.has_widget_metadata());
    }

    #[test]
    fn test_summarize_counts_cell_types() {
        let notebook: Notebook = serde_json::from_value(json!({
            "nbformat": 4,
            "nbformat_minor": 5,
            "metadata": {},
            "cells": [
                {"cell_type": "markdown", "metadata": {}, "source": []},
                {"cell_type": "code", "metadata": {"widgets": {}}, "source": [], "outputs": [], "execution_count": null},
                {"cell_type": "raw", "source": []}
            ]
        }))
        .unwrap();

        let summary = notebook.summarize();
        assert_eq!(summary.total_cells, 3);
        assert_eq!(summary.code_cells, 1);
        assert_eq!(summary.markdown_cells, 1);
        assert_eq!(summary.raw_cells, 1);
        assert_eq!(summary.widget_cells, 1);
        assert_eq!(summary.nbformat, 4);
    }
}
