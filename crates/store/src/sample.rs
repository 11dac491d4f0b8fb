//! Built-in fallback dataset.
//!
//! Shown only when the hub is unreachable or holds zero records. Sample
//! rows carry local identities, are never merged with real data, and are
//! never submitted back to the hub.

use tradelink_model::{LeadId, LeadRecord};

struct SampleSeed {
    months: &'static str,
    office: &'static str,
    reg_date: &'static str,
    ass_date: &'static str,
    lead_type: &'static str,
    role: &'static str,
    exp_trader: &'static str,
    buyer: &'static str,
    product: &'static str,
    email: &'static str,
    website: &'static str,
    hs: &'static str,
    hs_dsc: &'static str,
    cat_code: &'static str,
    commercial_dsc: &'static str,
    gross_weight: &'static str,
    net_weight: &'static str,
    fob_value_usd: &'static str,
    fob_value_birr: &'static str,
    qty: &'static str,
    unit: &'static str,
    destination: &'static str,
}

const SEEDS: &[SampleSeed] = &[
    SampleSeed {
        months: "July",
        office: "AA",
        reg_date: "7/2/2024",
        ass_date: "7/9/2024",
        lead_type: "International",
        role: "Seller",
        exp_trader: "Sidama Coffee Farmers Union",
        buyer: "Hamburg Coffee Co.",
        product: "Washed Arabica Coffee",
        email: "trade@hamburgcoffee.example",
        website: "hamburgcoffee.example",
        hs: "090111",
        hs_dsc: "Coffee, not roasted, not decaffeinated",
        cat_code: "AGR-01",
        commercial_dsc: "Grade 2 washed arabica, crop year 2024",
        gross_weight: "19,500.00",
        net_weight: "19,200.00",
        fob_value_usd: "86,400.00",
        fob_value_birr: "4,942,080.00",
        qty: "320",
        unit: "Bags",
        destination: "Germany",
    },
    SampleSeed {
        months: "July",
        office: "AA",
        reg_date: "7/5/2024",
        ass_date: "7/15/2024",
        lead_type: "International",
        role: "Buyer",
        exp_trader: "Awash Oilseeds PLC",
        buyer: "Nantong Grain Trading",
        product: "Humera Sesame Seeds",
        email: "imports@nantonggrain.example",
        website: "nantonggrain.example",
        hs: "120740",
        hs_dsc: "Sesamum seeds, whether or not broken",
        cat_code: "AGR-04",
        commercial_dsc: "Whitish humera sesame, 99.5% purity",
        gross_weight: "50,400.00",
        net_weight: "50,000.00",
        fob_value_usd: "97,500.00",
        fob_value_birr: "5,577,000.00",
        qty: "2,000",
        unit: "Bags",
        destination: "China",
    },
    SampleSeed {
        months: "August",
        office: "DD",
        reg_date: "8/1/2024",
        ass_date: "8/6/2024",
        lead_type: "International",
        role: "Seller",
        exp_trader: "Modjo Tannery Share Co.",
        buyer: "Firenze Pelle SRL",
        product: "Finished Sheep Leather",
        email: "acquisti@firenzepelle.example",
        website: "firenzepelle.example",
        hs: "411210",
        hs_dsc: "Leather further prepared after tanning",
        cat_code: "MAN-02",
        commercial_dsc: "Crust sheep leather, 0.7mm, assorted colors",
        gross_weight: "3,150.00",
        net_weight: "3,000.00",
        fob_value_usd: "45,000.00",
        fob_value_birr: "2,574,000.00",
        qty: "12,000",
        unit: "Sq.Ft",
        destination: "Italy",
    },
    SampleSeed {
        months: "August",
        office: "AA",
        reg_date: "8/4/2024",
        ass_date: "",
        lead_type: "Local",
        role: "Buyer",
        exp_trader: "",
        buyer: "Entoto Food Processing",
        product: "Chickpeas",
        email: "supply@entotofood.example",
        website: "",
        hs: "071320",
        hs_dsc: "Chickpeas (garbanzos), dried, shelled",
        cat_code: "AGR-02",
        commercial_dsc: "Kabuli chickpeas for cannery input",
        gross_weight: "25,200.00",
        net_weight: "25,000.00",
        fob_value_usd: "",
        fob_value_birr: "1,450,000.00",
        qty: "1,000",
        unit: "Bags",
        destination: "",
    },
    SampleSeed {
        months: "September",
        office: "AA",
        reg_date: "9/3/2024",
        ass_date: "9/10/2024",
        lead_type: "Local",
        role: "Seller",
        exp_trader: "Koka Flower Farm",
        buyer: "Sheraton Addis Events",
        product: "Cut Roses",
        email: "events@sheratonaddis.example",
        website: "",
        hs: "060311",
        hs_dsc: "Fresh cut roses and buds",
        cat_code: "HOR-01",
        commercial_dsc: "Premium long-stem roses, weekly standing order",
        gross_weight: "480.00",
        net_weight: "450.00",
        fob_value_usd: "",
        fob_value_birr: "210,000.00",
        qty: "9,000",
        unit: "Stems",
        destination: "",
    },
    SampleSeed {
        months: "September",
        office: "BD",
        reg_date: "9/12/2024",
        ass_date: "9/19/2024",
        lead_type: "International",
        role: "Buyer",
        exp_trader: "Benishangul Mining PLC",
        buyer: "Gulf Minerals FZE",
        product: "Tantalite Concentrate",
        email: "sourcing@gulfminerals.example",
        website: "gulfminerals.example",
        hs: "261590",
        hs_dsc: "Niobium, tantalum or vanadium ores",
        cat_code: "MIN-03",
        commercial_dsc: "Ta2O5 30% min concentrate",
        gross_weight: "10,100.00",
        net_weight: "10,000.00",
        fob_value_usd: "580,000.00",
        fob_value_birr: "33,176,000.00",
        qty: "10",
        unit: "Tons",
        destination: "United Arab Emirates",
    },
];

/// The fixed sample dataset, freshly materialized with local identities.
pub fn sample_leads() -> Vec<LeadRecord> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            // Stable synthetic keys so repeated fallbacks agree.
            let mut lead = LeadRecord::with_id(LeadId::Local(format!("sample-{:02}", i + 1)));
            lead.months = seed.months.into();
            lead.office = seed.office.into();
            lead.reg_date = seed.reg_date.into();
            lead.ass_date = seed.ass_date.into();
            lead.lead_type = seed.lead_type.into();
            lead.role = seed.role.into();
            lead.exp_trader = seed.exp_trader.into();
            lead.buyer = seed.buyer.into();
            lead.product = seed.product.into();
            lead.email = seed.email.into();
            lead.website = seed.website.into();
            lead.hs = seed.hs.into();
            lead.hs_dsc = seed.hs_dsc.into();
            lead.cat_code = seed.cat_code.into();
            lead.commercial_dsc = seed.commercial_dsc.into();
            lead.gross_weight = seed.gross_weight.into();
            lead.net_weight = seed.net_weight.into();
            lead.fob_value_usd = seed.fob_value_usd.into();
            lead.fob_value_birr = seed.fob_value_birr.into();
            lead.qty = seed.qty.into();
            lead.unit = seed.unit.into();
            lead.destination = seed.destination.into();
            lead
        })
        .collect()
}
