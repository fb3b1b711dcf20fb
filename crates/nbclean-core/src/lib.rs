//! # nbclean-core
//!
//! Jupyter Notebook (.ipynb) widget-metadata cleaning library.
//!
//! This crate parses a notebook file (nbformat 4.x), removes the broken
//! `widgets` key from every cell's metadata mapping, and writes the result
//! to a sibling file prefixed with `CLEANED_`. All other cell fields and
//! the document-level metadata pass through untouched.
//!
//! ## Example
//!
//! ```no_run
//! use nbclean_core::clean_notebook_file;
//!
//! let report = clean_notebook_file("analysis.ipynb")?;
//! println!(
//!     "Removed widget metadata from {} of {} cells",
//!     report.cleaned_cells, report.total_cells
//! );
//! # Ok::<(), nbclean_core::NotebookError>(())
//! ```

/// Widget-metadata cleaning pipeline
pub mod clean;
/// Error types for notebook cleaning
pub mod error;
/// Notebook data model
pub mod notebook;

pub use clean::{
    clean_notebook_file, clean_notebook_file_to, cleaned_output_path, parse_notebook,
    parse_notebook_from_str, serialize_notebook, strip_widget_metadata, CleanReport,
    CLEANED_PREFIX,
};
pub use error::{NotebookError, Result};
pub use notebook::{Cell, Notebook, NotebookSummary, WIDGETS_KEY};
