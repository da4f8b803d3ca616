//! Raw record normalization: heterogeneous source rows to canonical records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::{AppError, ComplianceAction, RecallNotice};

/// One raw input unit, keyed by canonical field names.
pub type RawRecord = BTreeMap<String, Value>;

/// Dashboard spreadsheet date cells, e.g. `07/02/2019`.
const SPREADSHEET_DATE: &str = "%m/%d/%Y";
/// openFDA record date strings, e.g. `20200311`.
const API_DATE: &str = "%Y%m%d";

/// Derive a canonical field name from raw header text: lowercase, with
/// whitespace runs collapsed to single underscores.
pub fn canonical_field_name(raw: &str) -> String {
    raw.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}

/// Zip a normalized header with one row of cells into a raw record.
/// Surplus cells on either side are dropped.
pub fn raw_from_row(header: &[String], cells: &[String]) -> RawRecord {
    header
        .iter()
        .cloned()
        .zip(cells.iter().map(|cell| Value::String(cell.clone())))
        .collect()
}

/// Normalize one spreadsheet row into a compliance action.
///
/// Unmatched raw fields are dropped; missing canonical fields stay absent.
pub fn compliance_action_from_raw(raw: &RawRecord) -> Result<ComplianceAction, AppError> {
    Ok(ComplianceAction {
        fei_number: opt_code(raw, "fei_number")?,
        firm_name: opt_text(raw, "firm_name"),
        product_type: opt_text(raw, "product_type"),
        center: opt_text(raw, "center"),
        action_type: opt_text(raw, "action_type"),
        action_taken_date: opt_date(raw, "action_taken_date", SPREADSHEET_DATE)?,
        state: opt_text(raw, "state"),
        case_injunction_id: opt_text(raw, "case_injunction_id"),
    })
}

/// Normalize one openFDA result object into a recall notice.
pub fn recall_from_raw(raw: &RawRecord) -> Result<RecallNotice, AppError> {
    Ok(RecallNotice {
        recall_number: opt_text(raw, "recall_number"),
        event_id: opt_code(raw, "event_id")?,
        status: opt_text(raw, "status"),
        classification: opt_text(raw, "classification"),
        product_type: opt_text(raw, "product_type"),
        recalling_firm: opt_text(raw, "recalling_firm"),
        city: opt_text(raw, "city"),
        state: opt_text(raw, "state"),
        country: opt_text(raw, "country"),
        product_description: opt_text(raw, "product_description"),
        reason_for_recall: opt_text(raw, "reason_for_recall"),
        voluntary_mandated: opt_text(raw, "voluntary_mandated"),
        distribution_pattern: opt_text(raw, "distribution_pattern"),
        recall_initiation_date: opt_date(raw, "recall_initiation_date", API_DATE)?,
        report_date: opt_date(raw, "report_date", API_DATE)?,
    })
}

fn opt_text(raw: &RawRecord, field: &str) -> Option<String> {
    match raw.get(field) {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a numeric code field. Accepts JSON numbers and numeric strings,
/// including the `"123.0"` artifact spreadsheet exports produce for
/// integer cells.
fn opt_code(raw: &RawRecord, field: &str) -> Result<Option<u64>, AppError> {
    let Some(value) = raw.get(field) else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        Value::Number(n) => match n.as_u64() {
            Some(code) => Ok(Some(code)),
            None => match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 => Ok(Some(f as u64)),
                _ => Err(normalization(field, &n.to_string())),
            },
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            let digits = trimmed.strip_suffix(".0").unwrap_or(trimmed);
            digits.parse::<u64>().map(Some).map_err(|_| normalization(field, s))
        }
        other => Err(normalization(field, &other.to_string())),
    }
}

fn opt_date(raw: &RawRecord, field: &str, format: &str) -> Result<Option<NaiveDate>, AppError> {
    let Some(value) = raw.get(field) else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(trimmed, format).map(Some).map_err(|_| normalization(field, s))
        }
        other => Err(normalization(field, &other.to_string())),
    }
}

fn normalization(field: &str, value: &str) -> AppError {
    AppError::Normalization { field: field.to_string(), value: value.to_string() }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::domain::CanonicalRecord;

    fn raw(entries: &[(&str, Value)]) -> RawRecord {
        entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn header_text_is_canonicalized() {
        assert_eq!(canonical_field_name("Action Taken Date"), "action_taken_date");
        assert_eq!(canonical_field_name("  FEI   Number "), "fei_number");
        assert_eq!(canonical_field_name("state"), "state");
    }

    #[test]
    fn well_formed_spreadsheet_row_normalizes() {
        let raw = raw(&[
            ("fei_number", json!("3001234567.0")),
            ("firm_name", json!(" Acme Foods ")),
            ("product_type", json!("Food")),
            ("action_type", json!("Warning Letter")),
            ("action_taken_date", json!("07/02/2019")),
            ("state", json!("CA")),
        ]);

        let record = compliance_action_from_raw(&raw).unwrap();
        assert_eq!(record.fei_number, Some(3001234567));
        assert_eq!(record.firm_name.as_deref(), Some("Acme Foods"));
        assert_eq!(record.action_taken_date, NaiveDate::from_ymd_opt(2019, 7, 2));
        assert_eq!(record.center, None);
    }

    #[test]
    fn unmatched_raw_fields_are_dropped() {
        let raw = raw(&[("firm_name", json!("Acme")), ("legacy_column", json!("ignored"))]);
        let record = compliance_action_from_raw(&raw).unwrap();
        assert_eq!(record.firm_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn malformed_date_names_field_and_value() {
        let raw = raw(&[("action_taken_date", json!("not a date"))]);
        let err = compliance_action_from_raw(&raw).unwrap_err();
        match err {
            AppError::Normalization { field, value } => {
                assert_eq!(field, "action_taken_date");
                assert_eq!(value, "not a date");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn malformed_code_is_rejected() {
        let raw = raw(&[("event_id", json!("EV-12"))]);
        let err = recall_from_raw(&raw).unwrap_err();
        assert!(matches!(err, AppError::Normalization { .. }));
    }

    #[test]
    fn api_record_normalizes_with_numeric_string_code() {
        let raw = raw(&[
            ("recall_number", json!("F-1234-2020")),
            ("event_id", json!("81234")),
            ("report_date", json!("20200311")),
            ("status", json!("Ongoing")),
        ]);

        let record = recall_from_raw(&raw).unwrap();
        assert_eq!(record.event_id, Some(81234));
        assert_eq!(record.report_date, NaiveDate::from_ymd_opt(2020, 3, 11));
    }

    #[test]
    fn empty_cells_stay_absent() {
        let raw = raw(&[("fei_number", json!("")), ("firm_name", json!("  "))]);
        let record = compliance_action_from_raw(&raw).unwrap();
        assert_eq!(record.fei_number, None);
        assert_eq!(record.firm_name, None);
    }

    proptest! {
        #[test]
        fn recall_field_sequence_matches_declared_order(
            recall_number in "F-[0-9]{4}-20[0-9]{2}",
            event_id in 1u64..1_000_000,
            firm in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]",
            year in 2000i32..2030,
            month in 1u32..13,
            day in 1u32..29,
        ) {
            let date = format!("{:04}{:02}{:02}", year, month, day);
            let raw = raw(&[
                ("recall_number", json!(recall_number.clone())),
                ("event_id", json!(event_id)),
                ("recalling_firm", json!(firm.clone())),
                ("report_date", json!(date)),
            ]);

            let record = CanonicalRecord::Recall(recall_from_raw(&raw).unwrap());
            let names = record.field_names();
            let values = record.field_values();

            prop_assert_eq!(names, RecallNotice::FIELDS);
            prop_assert_eq!(values.len(), names.len());

            let index = |field: &str| names.iter().position(|name| *name == field).unwrap();
            prop_assert_eq!(values[index("recall_number")].as_str(), recall_number.as_str());
            let event_id_str = event_id.to_string();
            prop_assert_eq!(values[index("event_id")].as_str(), event_id_str.as_str());
            prop_assert_eq!(values[index("recalling_firm")].as_str(), firm.as_str());
        }
    }
}
