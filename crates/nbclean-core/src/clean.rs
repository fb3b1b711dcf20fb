//! Widget-metadata cleaning pipeline.
//!
//! A single linear transformation: parse the notebook, drop the `widgets`
//! key from every cell metadata mapping that carries it, and write the
//! result to a sibling file prefixed with `CLEANED_`. Fail-fast and
//! all-or-nothing: nothing is written unless parsing and serialization
//! both succeeded, and the input file is never modified.

use crate::error::{NotebookError, Result};
use crate::notebook::{Notebook, WIDGETS_KEY};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix applied to the input file name to derive the default output path
pub const CLEANED_PREFIX: &str = "CLEANED_";

/// Supported nbformat major version
const SUPPORTED_NBFORMAT: u64 = 4;

/// Outcome of a successful cleaning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Input notebook path
    pub input: PathBuf,
    /// Path the cleaned notebook was written to
    pub output: PathBuf,
    /// Total number of cells in the notebook
    pub total_cells: usize,
    /// Number of cells that had `widgets` metadata removed
    pub cleaned_cells: usize,
}

/// Parse a Jupyter notebook from a file path
///
/// # Errors
///
/// Returns an error if:
/// - The input path does not exist (`FileNotFound`)
/// - The file cannot be read (I/O error)
/// - The notebook JSON is malformed
/// - The nbformat major version is not 4
#[must_use = "this function returns a parsed notebook that should be processed"]
pub fn parse_notebook<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(NotebookError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_notebook_from_str(&content)
}

/// Parse a Jupyter notebook from a string
///
/// # Errors
///
/// Returns an error if the notebook JSON is malformed or the nbformat
/// major version is not 4.
#[must_use = "this function returns a parsed notebook that should be processed"]
pub fn parse_notebook_from_str(content: &str) -> Result<Notebook> {
    let notebook: Notebook = serde_json::from_str(content)?;

    if notebook.nbformat != SUPPORTED_NBFORMAT {
        return Err(NotebookError::UnsupportedVersion {
            major: notebook.nbformat,
            minor: notebook.nbformat_minor,
        });
    }

    Ok(notebook)
}

/// Remove the `widgets` key from every cell metadata mapping that has it.
///
/// Cells without metadata, or without the key, are left untouched; all
/// other metadata entries survive. Returns the number of cells modified.
/// Idempotent: a second pass removes nothing.
pub fn strip_widget_metadata(notebook: &mut Notebook) -> usize {
    let mut cleaned = 0;
    for cell in &mut notebook.cells {
        if let Some(metadata) = cell.metadata.as_mut() {
            if metadata.remove(WIDGETS_KEY).is_some() {
                cleaned += 1;
            }
        }
    }
    cleaned
}

/// Derive the default output path: same directory, file name prefixed
/// with `CLEANED_` (e.g. `analysis.ipynb` -> `CLEANED_analysis.ipynb`).
#[must_use]
pub fn cleaned_output_path(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default();
    input.with_file_name(format!("{CLEANED_PREFIX}{}", name.to_string_lossy()))
}

/// Serialize a notebook to pretty-printed JSON with a trailing newline
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_notebook(notebook: &Notebook) -> Result<String> {
    let mut json = serde_json::to_string_pretty(notebook)?;
    json.push('\n');
    Ok(json)
}

/// Clean a notebook file, writing the result to the default
/// `CLEANED_`-prefixed sibling path.
///
/// # Errors
///
/// Returns an error if the input cannot be found, read, or parsed, or if
/// the output cannot be written. No output file is created on failure.
pub fn clean_notebook_file<P: AsRef<Path>>(input: P) -> Result<CleanReport> {
    let input = input.as_ref();
    let output = cleaned_output_path(input);
    clean_notebook_file_to(input, &output)
}

/// Clean a notebook file, writing the result to an explicit output path.
///
/// # Errors
///
/// Returns an error if the input cannot be found, read, or parsed, or if
/// the output cannot be written. No output file is created on failure.
pub fn clean_notebook_file_to<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<CleanReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut notebook = parse_notebook(input)?;
    let total_cells = notebook.cells.len();
    let cleaned_cells = strip_widget_metadata(&mut notebook);
    let json = serialize_notebook(&notebook)?;

    fs::write(output, json).map_err(|source| NotebookError::WriteFailed {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(CleanReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        total_cells,
        cleaned_cells,
    })
}
