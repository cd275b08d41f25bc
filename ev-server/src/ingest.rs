//! Static dataset loading.
//!
//! The public spreadsheet of charging stations is distributed as an Excel
//! file; we consume a JSON extract of it (an array of raw station rows)
//! so the server has no spreadsheet dependency. Converting the sheet is a
//! one-off preprocessing step outside this crate.

use std::fs;
use std::path::Path;

use crate::repository::RawStation;

/// Errors from dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Could not read the dataset file.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The file was not a JSON array of station rows.
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load raw station rows from a JSON dataset extract.
///
/// Row-level problems (missing coordinates, absent fields) are not errors
/// here; the repository drops unusable rows during normalization. Only an
/// unreadable file or malformed JSON fails the load.
pub fn load_dataset(path: &Path) -> Result<Vec<RawStation>, IngestError> {
    let body = fs::read_to_string(path)?;
    let rows: Vec<RawStation> = serde_json::from_str(&body)?;
    Ok(rows)
}
