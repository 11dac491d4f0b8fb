use std::fmt;
use std::path::Path;

use tradelink_model::{LeadRecord, Scope};

use crate::normalize::normalize_row;
use crate::reader::{read_table, RawTable};

/// A normalized import, ready for the reconciliation store.
#[derive(Debug)]
pub struct ImportBatch {
    pub records: Vec<LeadRecord>,
    pub rows_read: usize,
    pub rows_discarded: usize,
    /// Predominant scope of the surviving records — a display hint used
    /// to pick which category tab to show after import, never stored.
    pub scope_hint: Scope,
}

#[derive(Debug)]
pub enum ImportError {
    /// Unreadable file, missing worksheet, or malformed content.
    Parse(String),
    /// The file parsed but held no data rows at all.
    NoRows,
    /// Every data row was blank after normalization.
    NothingToImport { rows_read: usize },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "cannot read file: {msg}"),
            Self::NoRows => write!(f, "file has a header row but no data rows"),
            Self::NothingToImport { rows_read } => {
                write!(f, "nothing to import: all {rows_read} row(s) were blank")
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Normalize a raw table into an import batch.
///
/// Blank rows are dropped and counted, not errored — but if *every* row
/// drops, the whole operation is "nothing to import" and the caller must
/// not contact the remote service.
pub fn build_batch(table: &RawTable) -> Result<ImportBatch, ImportError> {
    if table.rows.is_empty() {
        return Err(ImportError::NoRows);
    }

    let mut records = Vec::new();
    let mut rows_discarded = 0usize;

    for cells in &table.rows {
        match normalize_row(&table.headers, cells) {
            Some(record) => records.push(record),
            None => rows_discarded += 1,
        }
    }

    if records.is_empty() {
        return Err(ImportError::NothingToImport {
            rows_read: table.rows.len(),
        });
    }

    let scope_hint = predominant_scope(&records);

    Ok(ImportBatch {
        rows_read: table.rows.len(),
        rows_discarded,
        records,
        scope_hint,
    })
}

/// Read and normalize a spreadsheet file in one step.
pub fn import_file(path: &Path) -> Result<ImportBatch, ImportError> {
    let table = read_table(path).map_err(ImportError::Parse)?;
    build_batch(&table)
}

/// The scope most of the batch belongs to. Ties go to International, the
/// same side blank records already classify to.
fn predominant_scope(records: &[LeadRecord]) -> Scope {
    let local = records
        .iter()
        .filter(|r| Scope::of_record(r) == Scope::Local)
        .count();
    if local * 2 > records.len() {
        Scope::Local
    } else {
        Scope::International
    }
}
