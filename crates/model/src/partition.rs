use serde::Serialize;

use crate::record::{Column, LeadRecord};

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// Geographic scope of a lead, read from the `LeadType` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Local,
    International,
}

impl Scope {
    /// Classify a record by its `LeadType` value (case-insensitive).
    ///
    /// Blank or unrecognized values classify as `International` — the
    /// behavior inherited from the upstream data entry convention, kept
    /// as-is pending product confirmation.
    pub fn of_record(record: &LeadRecord) -> Scope {
        if record.lead_type.trim().eq_ignore_ascii_case("local") {
            Scope::Local
        } else {
            Scope::International
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Local => write!(f, "Local"),
            Scope::International => write!(f, "International"),
        }
    }
}

/// Market role of a lead, read from the `Role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeRole {
    Buyer,
    Seller,
}

impl TradeRole {
    /// Classify a record by its `Role` value: case-insensitive exact
    /// match. Anything else (including blank) has no role facet.
    pub fn of_record(record: &LeadRecord) -> Option<TradeRole> {
        let role = record.role.trim();
        if role.eq_ignore_ascii_case("buyer") {
            Some(TradeRole::Buyer)
        } else if role.eq_ignore_ascii_case("seller") {
            Some(TradeRole::Seller)
        } else {
            None
        }
    }
}

impl std::fmt::Display for TradeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeRole::Buyer => write!(f, "Buyer"),
            TradeRole::Seller => write!(f, "Seller"),
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Partition/search criteria for a filtered read of the working set.
/// All present criteria must hold (AND).
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    pub scope: Option<Scope>,
    pub role: Option<TradeRole>,
    /// Case-insensitive substring match across every column.
    pub search: Option<String>,
}

impl LeadFilter {
    pub fn matches(&self, record: &LeadRecord) -> bool {
        if let Some(scope) = self.scope {
            if Scope::of_record(record) != scope {
                return false;
            }
        }
        if let Some(role) = self.role {
            if TradeRole::of_record(record) != Some(role) {
                return false;
            }
        }
        if let Some(ref needle) = self.search {
            let needle = needle.to_lowercase();
            if !needle.is_empty()
                && !Column::ALL
                    .iter()
                    .any(|c| record.get(*c).to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        true
    }
}

/// Filter the working set. Pure: preserves working-set order, never
/// mutates, recomputed on every read.
pub fn filter_records<'a>(records: &'a [LeadRecord], filter: &LeadFilter) -> Vec<&'a LeadRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
