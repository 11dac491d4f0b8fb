use tradelink_model::LeadRecord;

use crate::alias::resolve_header;
use crate::coerce::coerce;
use crate::reader::RawCell;

/// Assemble one canonical record from a raw row, or discard it.
///
/// Every canonical column starts empty; each header that resolves gets
/// its cell coerced into the column. When several raw headers resolve to
/// the same column, the last one in row order wins (alias collisions are
/// rare and documented per column in the alias table). Rows that end up
/// with no non-blank column are discarded — they never reach the store.
///
/// `headers` and `cells` pair positionally; a short row is treated as if
/// its missing cells were empty.
pub fn normalize_row(headers: &[String], cells: &[RawCell]) -> Option<LeadRecord> {
    let mut record = LeadRecord::new();

    for (idx, header) in headers.iter().enumerate() {
        let Some(column) = resolve_header(header) else {
            continue;
        };
        let Some(cell) = cells.get(idx) else {
            continue;
        };
        record.set(column, coerce(column, &cell.value, cell.hint));
    }

    if record.is_blank() {
        None
    } else {
        Some(record)
    }
}
