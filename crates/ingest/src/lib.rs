//! `tradelink-ingest` — heterogeneous spreadsheet exports in, canonical
//! lead records out.
//!
//! The chain: [`reader`] parses a file into raw headers + cells,
//! [`alias`] maps arbitrary header spellings onto the canonical schema,
//! [`coerce`] renders each cell into its column's canonical form,
//! [`normalize`] assembles records and discards blank rows, and
//! [`import`] drives the whole chain over a file and produces the batch
//! handed to the reconciliation store.

pub mod alias;
pub mod coerce;
pub mod import;
pub mod normalize;
pub mod reader;

pub use alias::resolve_header;
pub use coerce::coerce;
pub use import::{build_batch, import_file, ImportBatch, ImportError};
pub use normalize::normalize_row;
pub use reader::{read_table, CellHint, RawCell, RawTable};
