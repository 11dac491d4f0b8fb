use tradelink_model::Column;

/// Normalize a raw header for alias lookup: uppercase, every
/// non-alphanumeric character stripped. `" Buyer  E-mail "` and
/// `"BUYER_EMAIL"` both normalize to `BUYEREMAIL`.
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Map an arbitrary export header onto its canonical column.
///
/// Returns `None` for headers with no known alias — the column is
/// silently ignored so one oddly-labeled file cannot abort an import.
/// Case and punctuation variance is absorbed by [`normalize_header`];
/// the table below only ever sees normalized forms.
pub fn resolve_header(raw: &str) -> Option<Column> {
    // "BYER" is a data-entry typo observed in real export files; it is
    // kept so those files keep importing. See DESIGN.md.
    match normalize_header(raw).as_str() {
        "MONTHS" | "MONTH" | "PERIOD" | "REGMONTH" => Some(Column::Months),
        "OFFICE" | "OFFICECODE" | "BRANCH" | "BRANCHOFFICE" => Some(Column::Office),
        "REGDATE" | "REGISTRATIONDATE" | "DATEOFREGISTRATION" | "REGISTEREDDATE" => {
            Some(Column::RegDate)
        }
        "ASSDATE" | "ASSESSMENTDATE" | "DATEOFASSESSMENT" | "ASSESSEDDATE" => {
            Some(Column::AssDate)
        }
        "LEADTYPE" | "TYPE" | "LEADSCOPE" | "SCOPE" | "LOCALINTERNATIONAL" => {
            Some(Column::LeadType)
        }
        "ROLE" | "BUYERSELLER" | "TRADERROLE" | "BYER" => Some(Column::Role),
        "EXPTRADER" | "EXPORTER" | "EXPORTTRADER" | "TRADERNAME" | "TRADER" => {
            Some(Column::ExpTrader)
        }
        "BUYER" | "BUYERNAME" | "IMPORTER" | "COUNTERPARTY" => Some(Column::Buyer),
        "PRODUCT" | "PRODUCTNAME" | "COMMODITY" | "ITEM" => Some(Column::Product),
        "EMAIL" | "BUYEREMAIL" | "MAIL" | "EMAILADDRESS" => Some(Column::Email),
        "WEBSITE" | "WEB" | "URL" | "SITE" => Some(Column::Website),
        "HS" | "HSCODE" | "HSNO" | "HARMONIZEDCODE" => Some(Column::Hs),
        "HSDSC" | "HSDESCRIPTION" | "HSDESC" | "HSCODEDESCRIPTION" => Some(Column::HsDsc),
        "CATCODE" | "CATEGORYCODE" | "CATEGORY" | "CAT" => Some(Column::CatCode),
        "COMMERCIALDSC" | "COMMERCIALDESCRIPTION" | "COMMDESC" | "DESCRIPTION" => {
            Some(Column::CommercialDsc)
        }
        "GROSSWEIGHT" | "GROSSWT" | "GRWEIGHT" | "GROSSKG" => Some(Column::GrossWeight),
        "NETWEIGHT" | "NETWT" | "NTWEIGHT" | "NETKG" => Some(Column::NetWeight),
        "FOBVALUEUSD" | "FOBUSD" | "FOBVALUE" | "VALUEUSD" | "FOB" => Some(Column::FobValueUsd),
        "FOBVALUEBIRR" | "FOBBIRR" | "FOBETB" | "VALUEBIRR" => Some(Column::FobValueBirr),
        "QTY" | "QUANTITY" | "QTYNO" => Some(Column::Qty),
        "UNIT" | "UOM" | "UNITOFMEASURE" | "MEASUREMENT" => Some(Column::Unit),
        "DESTINATION" | "DEST" | "DESTINATIONCOUNTRY" | "COUNTRY" => Some(Column::Destination),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_case_and_punctuation() {
        assert_eq!(normalize_header(" Buyer  E-mail "), "BUYEREMAIL");
        assert_eq!(normalize_header("fob_value (USD)"), "FOBVALUEUSD");
        assert_eq!(normalize_header("HS.Code"), "HSCODE");
    }

    #[test]
    fn every_canonical_column_has_at_least_one_alias() {
        // The canonical name itself must always resolve.
        for column in Column::ALL {
            assert_eq!(
                resolve_header(column.name()),
                Some(column),
                "canonical name {:?} failed to resolve",
                column.name(),
            );
        }
    }

    #[test]
    fn known_synonyms_resolve() {
        assert_eq!(resolve_header("Lead Type"), Some(Column::LeadType));
        assert_eq!(resolve_header("SCOPE"), Some(Column::LeadType));
        assert_eq!(resolve_header("buyer e-mail"), Some(Column::Email));
        assert_eq!(resolve_header("Mail"), Some(Column::Email));
        assert_eq!(resolve_header("Exporter"), Some(Column::ExpTrader));
        assert_eq!(resolve_header("Gross Wt."), Some(Column::GrossWeight));
        assert_eq!(resolve_header("FOB Value (USD)"), Some(Column::FobValueUsd));
        assert_eq!(resolve_header("quantity"), Some(Column::Qty));
        assert_eq!(resolve_header("U.O.M"), Some(Column::Unit));
        assert_eq!(resolve_header("Destination Country"), Some(Column::Destination));
    }

    #[test]
    fn legacy_byer_typo_maps_to_role() {
        assert_eq!(resolve_header("BYER"), Some(Column::Role));
        assert_eq!(resolve_header("byer"), Some(Column::Role));
    }

    #[test]
    fn unknown_headers_are_ignored() {
        assert_eq!(resolve_header("Remarks"), None);
        assert_eq!(resolve_header(""), None);
        assert_eq!(resolve_header("  ~~~  "), None);
    }
}
