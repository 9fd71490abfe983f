//! Batch evaluation: fan a parsed item table out over a session.

pub mod table;

pub use table::Table;

use kinesio_core::{CoreError, ResultRecord, Session};

/// Required column name in an uploaded table. The match is exact.
pub const ITEM_COLUMN: &str = "Item";

/// Evaluates every row of `table` against `session`, sharing one
/// intention and timing note across the batch.
///
/// The schema and input preconditions are checked before any row is
/// scored; a missing `Item` column aborts the whole batch with a single
/// `Schema` error and appends nothing. Rows are processed in table
/// order; a row with an empty `Item` cell is skipped. Returns the
/// appended records.
pub fn run_batch(
    session: &mut Session,
    table: &Table,
    intention: &str,
    timing: &str,
) -> Result<Vec<ResultRecord>, CoreError> {
    let item_column = table.column(ITEM_COLUMN).ok_or_else(|| {
        CoreError::Schema(format!("table must have a column named {ITEM_COLUMN:?}"))
    })?;
    if !session.subject().is_set() {
        return Err(CoreError::MissingInput("subject name"));
    }
    if intention.is_empty() {
        return Err(CoreError::MissingInput("intention"));
    }

    let mut appended = Vec::new();
    for (index, row) in table.rows().iter().enumerate() {
        let item = row[item_column].as_str();
        if item.is_empty() {
            // Row numbers count the header line, matching the file.
            log::warn!("skipping row {}: empty {} cell", index + 2, ITEM_COLUMN);
            continue;
        }
        appended.push(session.evaluate_timed(intention, item, timing)?);
    }
    Ok(appended)
}
