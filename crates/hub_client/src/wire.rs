//! Wire representation of a lead record.
//!
//! The hub speaks the 22 canonical columns by name plus an optional
//! server-assigned `id`. Conversion to and from [`LeadRecord`] is where
//! local/remote identity is decided: records the hub returns always carry
//! `id` and become `LeadId::Remote`; outgoing local records omit `id`
//! entirely (local keys never leave this process).

use serde::{Deserialize, Serialize};

use tradelink_model::{LeadId, LeadRecord};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Months", default)]
    pub months: String,
    #[serde(rename = "Office", default)]
    pub office: String,
    #[serde(rename = "RegDate", default)]
    pub reg_date: String,
    #[serde(rename = "AssDate", default)]
    pub ass_date: String,
    #[serde(rename = "LeadType", default)]
    pub lead_type: String,
    #[serde(rename = "Role", default)]
    pub role: String,
    #[serde(rename = "ExpTrader", default)]
    pub exp_trader: String,
    #[serde(rename = "Buyer", default)]
    pub buyer: String,
    #[serde(rename = "Product", default)]
    pub product: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Website", default)]
    pub website: String,
    #[serde(rename = "HS", default)]
    pub hs: String,
    #[serde(rename = "HSDsc", default)]
    pub hs_dsc: String,
    #[serde(rename = "CatCode", default)]
    pub cat_code: String,
    #[serde(rename = "CommercialDsc", default)]
    pub commercial_dsc: String,
    #[serde(rename = "GrossWeight", default)]
    pub gross_weight: String,
    #[serde(rename = "NetWeight", default)]
    pub net_weight: String,
    #[serde(rename = "FobValueUSD", default)]
    pub fob_value_usd: String,
    #[serde(rename = "FobValueBirr", default)]
    pub fob_value_birr: String,
    #[serde(rename = "Qty", default)]
    pub qty: String,
    #[serde(rename = "Unit", default)]
    pub unit: String,
    #[serde(rename = "Destination", default)]
    pub destination: String,
}

impl WireRecord {
    /// Outgoing form of a record. Remote ids travel with the record so
    /// the hub can address it; local keys are dropped.
    pub fn from_lead(lead: &LeadRecord) -> Self {
        WireRecord {
            id: match &lead.id {
                LeadId::Remote(id) => Some(id.clone()),
                LeadId::Local(_) => None,
            },
            months: lead.months.clone(),
            office: lead.office.clone(),
            reg_date: lead.reg_date.clone(),
            ass_date: lead.ass_date.clone(),
            lead_type: lead.lead_type.clone(),
            role: lead.role.clone(),
            exp_trader: lead.exp_trader.clone(),
            buyer: lead.buyer.clone(),
            product: lead.product.clone(),
            email: lead.email.clone(),
            website: lead.website.clone(),
            hs: lead.hs.clone(),
            hs_dsc: lead.hs_dsc.clone(),
            cat_code: lead.cat_code.clone(),
            commercial_dsc: lead.commercial_dsc.clone(),
            gross_weight: lead.gross_weight.clone(),
            net_weight: lead.net_weight.clone(),
            fob_value_usd: lead.fob_value_usd.clone(),
            fob_value_birr: lead.fob_value_birr.clone(),
            qty: lead.qty.clone(),
            unit: lead.unit.clone(),
            destination: lead.destination.clone(),
        }
    }

    /// A record returned by the hub. The hub is the source of truth for
    /// identity, so a missing `id` is a contract violation.
    pub fn into_remote_lead(self) -> Result<LeadRecord, String> {
        let id = self
            .id
            .clone()
            .ok_or_else(|| "hub record is missing its id".to_string())?;
        Ok(self.into_lead_with(LeadId::Remote(id)))
    }

    /// A record from user-supplied JSON (e.g. `tlink add`): keep a
    /// present `id` as remote, otherwise mint a fresh local key.
    pub fn into_lead(self) -> LeadRecord {
        let id = match self.id.clone() {
            Some(id) => LeadId::Remote(id),
            None => LeadId::fresh_local(),
        };
        self.into_lead_with(id)
    }

    fn into_lead_with(self, id: LeadId) -> LeadRecord {
        let mut lead = LeadRecord::with_id(id);
        lead.months = self.months;
        lead.office = self.office;
        lead.reg_date = self.reg_date;
        lead.ass_date = self.ass_date;
        lead.lead_type = self.lead_type;
        lead.role = self.role;
        lead.exp_trader = self.exp_trader;
        lead.buyer = self.buyer;
        lead.product = self.product;
        lead.email = self.email;
        lead.website = self.website;
        lead.hs = self.hs;
        lead.hs_dsc = self.hs_dsc;
        lead.cat_code = self.cat_code;
        lead.commercial_dsc = self.commercial_dsc;
        lead.gross_weight = self.gross_weight;
        lead.net_weight = self.net_weight;
        lead.fob_value_usd = self.fob_value_usd;
        lead.fob_value_birr = self.fob_value_birr;
        lead.qty = self.qty;
        lead.unit = self.unit;
        lead.destination = self.destination;
        lead
    }
}
