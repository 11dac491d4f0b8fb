//! `tradelink-store` — single owner of the in-memory lead working set.
//!
//! All mutation between callers and the remote hub flows through
//! [`LeadStore`]. Remote failures never corrupt the working set: every
//! operation either fully applies the hub's response or leaves the set in
//! its last-known-good state. When the hub is unreachable or empty, the
//! store degrades to a fixed built-in sample dataset so the caller always
//! has something to show.

pub mod sample;
pub mod store;

pub use sample::sample_leads;
pub use store::{FallbackReason, LeadStore, LoadOutcome, StoreError};
