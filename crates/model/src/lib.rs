//! `tradelink-model` — Canonical trade-lead records.
//!
//! Pure data crate: the fixed 22-column schema, record identity, and the
//! partition predicates used for filtered reads. No IO or network
//! dependencies.

pub mod identity;
pub mod partition;
pub mod record;

pub use identity::LeadId;
pub use partition::{filter_records, LeadFilter, Scope, TradeRole};
pub use record::{Column, ColumnClass, LeadRecord};
