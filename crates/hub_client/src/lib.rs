//! `tradelink-hub-client` — HTTP client for the authoritative lead hub.
//!
//! Blocking reqwest client (no async runtime required). Covers the full
//! lead-records surface: list, batch import, single create/update/delete.
//! Hub endpoint configuration is persisted next to the user's other
//! config (`~/.config/tradelink/hub.json`).

pub mod client;
pub mod config;
pub mod wire;

pub use client::{HubClient, HubError};
pub use config::{resolve_api_base, HubConfig, DEFAULT_API_BASE};
pub use wire::WireRecord;
