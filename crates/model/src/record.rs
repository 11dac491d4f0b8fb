use serde::Serialize;

use crate::identity::LeadId;

// ---------------------------------------------------------------------------
// Column schema
// ---------------------------------------------------------------------------

/// The fixed canonical column set.
///
/// Column order is the display/export contract — downstream CSV export and
/// table output emit columns in this order. Order carries no semantic
/// meaning beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Months,
    Office,
    RegDate,
    AssDate,
    LeadType,
    Role,
    ExpTrader,
    Buyer,
    Product,
    Email,
    Website,
    Hs,
    HsDsc,
    CatCode,
    CommercialDsc,
    GrossWeight,
    NetWeight,
    FobValueUsd,
    FobValueBirr,
    Qty,
    Unit,
    Destination,
}

/// Coercion class of a column. Decides how raw cell values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    /// Calendar date, canonical form `M/D/YYYY` (no zero padding).
    Date,
    /// Currency or weight: two decimals, comma thousands separators.
    Money,
    /// Quantity: integers bare, non-integers up to two decimals.
    Quantity,
    /// Trimmed pass-through.
    Text,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 22] = [
        Column::Months,
        Column::Office,
        Column::RegDate,
        Column::AssDate,
        Column::LeadType,
        Column::Role,
        Column::ExpTrader,
        Column::Buyer,
        Column::Product,
        Column::Email,
        Column::Website,
        Column::Hs,
        Column::HsDsc,
        Column::CatCode,
        Column::CommercialDsc,
        Column::GrossWeight,
        Column::NetWeight,
        Column::FobValueUsd,
        Column::FobValueBirr,
        Column::Qty,
        Column::Unit,
        Column::Destination,
    ];

    /// Canonical column name as it appears on the wire and in exports.
    pub fn name(self) -> &'static str {
        match self {
            Column::Months => "Months",
            Column::Office => "Office",
            Column::RegDate => "RegDate",
            Column::AssDate => "AssDate",
            Column::LeadType => "LeadType",
            Column::Role => "Role",
            Column::ExpTrader => "ExpTrader",
            Column::Buyer => "Buyer",
            Column::Product => "Product",
            Column::Email => "Email",
            Column::Website => "Website",
            Column::Hs => "HS",
            Column::HsDsc => "HSDsc",
            Column::CatCode => "CatCode",
            Column::CommercialDsc => "CommercialDsc",
            Column::GrossWeight => "GrossWeight",
            Column::NetWeight => "NetWeight",
            Column::FobValueUsd => "FobValueUSD",
            Column::FobValueBirr => "FobValueBirr",
            Column::Qty => "Qty",
            Column::Unit => "Unit",
            Column::Destination => "Destination",
        }
    }

    pub fn class(self) -> ColumnClass {
        match self {
            Column::RegDate | Column::AssDate => ColumnClass::Date,
            Column::GrossWeight
            | Column::NetWeight
            | Column::FobValueUsd
            | Column::FobValueBirr => ColumnClass::Money,
            Column::Qty => ColumnClass::Quantity,
            _ => ColumnClass::Text,
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A canonical trade lead.
///
/// Fixed shape: every column is a `String`, absent values are empty
/// strings. Readers never need to null-check a field. The two facets
/// (scope, role) are derived from `lead_type` / `role` on read — see
/// [`crate::partition`] — and are never stored separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecord {
    pub id: LeadId,
    #[serde(rename = "Months")]
    pub months: String,
    #[serde(rename = "Office")]
    pub office: String,
    #[serde(rename = "RegDate")]
    pub reg_date: String,
    #[serde(rename = "AssDate")]
    pub ass_date: String,
    #[serde(rename = "LeadType")]
    pub lead_type: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "ExpTrader")]
    pub exp_trader: String,
    #[serde(rename = "Buyer")]
    pub buyer: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "HS")]
    pub hs: String,
    #[serde(rename = "HSDsc")]
    pub hs_dsc: String,
    #[serde(rename = "CatCode")]
    pub cat_code: String,
    #[serde(rename = "CommercialDsc")]
    pub commercial_dsc: String,
    #[serde(rename = "GrossWeight")]
    pub gross_weight: String,
    #[serde(rename = "NetWeight")]
    pub net_weight: String,
    #[serde(rename = "FobValueUSD")]
    pub fob_value_usd: String,
    #[serde(rename = "FobValueBirr")]
    pub fob_value_birr: String,
    #[serde(rename = "Qty")]
    pub qty: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Destination")]
    pub destination: String,
}

impl LeadRecord {
    /// A blank record with a freshly minted local identity.
    pub fn new() -> Self {
        Self::with_id(LeadId::fresh_local())
    }

    pub fn with_id(id: LeadId) -> Self {
        LeadRecord {
            id,
            months: String::new(),
            office: String::new(),
            reg_date: String::new(),
            ass_date: String::new(),
            lead_type: String::new(),
            role: String::new(),
            exp_trader: String::new(),
            buyer: String::new(),
            product: String::new(),
            email: String::new(),
            website: String::new(),
            hs: String::new(),
            hs_dsc: String::new(),
            cat_code: String::new(),
            commercial_dsc: String::new(),
            gross_weight: String::new(),
            net_weight: String::new(),
            fob_value_usd: String::new(),
            fob_value_birr: String::new(),
            qty: String::new(),
            unit: String::new(),
            destination: String::new(),
        }
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Months => &self.months,
            Column::Office => &self.office,
            Column::RegDate => &self.reg_date,
            Column::AssDate => &self.ass_date,
            Column::LeadType => &self.lead_type,
            Column::Role => &self.role,
            Column::ExpTrader => &self.exp_trader,
            Column::Buyer => &self.buyer,
            Column::Product => &self.product,
            Column::Email => &self.email,
            Column::Website => &self.website,
            Column::Hs => &self.hs,
            Column::HsDsc => &self.hs_dsc,
            Column::CatCode => &self.cat_code,
            Column::CommercialDsc => &self.commercial_dsc,
            Column::GrossWeight => &self.gross_weight,
            Column::NetWeight => &self.net_weight,
            Column::FobValueUsd => &self.fob_value_usd,
            Column::FobValueBirr => &self.fob_value_birr,
            Column::Qty => &self.qty,
            Column::Unit => &self.unit,
            Column::Destination => &self.destination,
        }
    }

    pub fn set(&mut self, column: Column, value: String) {
        let slot = match column {
            Column::Months => &mut self.months,
            Column::Office => &mut self.office,
            Column::RegDate => &mut self.reg_date,
            Column::AssDate => &mut self.ass_date,
            Column::LeadType => &mut self.lead_type,
            Column::Role => &mut self.role,
            Column::ExpTrader => &mut self.exp_trader,
            Column::Buyer => &mut self.buyer,
            Column::Product => &mut self.product,
            Column::Email => &mut self.email,
            Column::Website => &mut self.website,
            Column::Hs => &mut self.hs,
            Column::HsDsc => &mut self.hs_dsc,
            Column::CatCode => &mut self.cat_code,
            Column::CommercialDsc => &mut self.commercial_dsc,
            Column::GrossWeight => &mut self.gross_weight,
            Column::NetWeight => &mut self.net_weight,
            Column::FobValueUsd => &mut self.fob_value_usd,
            Column::FobValueBirr => &mut self.fob_value_birr,
            Column::Qty => &mut self.qty,
            Column::Unit => &mut self.unit,
            Column::Destination => &mut self.destination,
        };
        *slot = value;
    }

    /// True when every column is empty or whitespace. Blank records are
    /// discarded during normalization and never enter the working set.
    pub fn is_blank(&self) -> bool {
        Column::ALL.iter().all(|c| self.get(*c).trim().is_empty())
    }
}

impl Default for LeadRecord {
    fn default() -> Self {
        Self::new()
    }
}
