//! Canonical record shapes produced by normalization.

use chrono::NaiveDate;

/// One normalized input unit, independent of its raw source format.
///
/// Every variant exposes the same structural contract: a fixed, ordered
/// field-name sequence usable as an export header, and a value sequence in
/// that same order.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalRecord {
    ComplianceAction(ComplianceAction),
    Recall(RecallNotice),
}

impl CanonicalRecord {
    /// Fixed field-name sequence for this record's shape.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            CanonicalRecord::ComplianceAction(_) => ComplianceAction::FIELDS,
            CanonicalRecord::Recall(_) => RecallNotice::FIELDS,
        }
    }

    /// Field values in exactly the `field_names` order. Absent values
    /// render as empty strings.
    pub fn field_values(&self) -> Vec<String> {
        match self {
            CanonicalRecord::ComplianceAction(record) => record.field_values(),
            CanonicalRecord::Recall(record) => record.field_values(),
        }
    }
}

/// One FDA compliance action, from a row of the dashboard spreadsheet export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceAction {
    pub fei_number: Option<u64>,
    pub firm_name: Option<String>,
    pub product_type: Option<String>,
    pub center: Option<String>,
    pub action_type: Option<String>,
    pub action_taken_date: Option<NaiveDate>,
    pub state: Option<String>,
    pub case_injunction_id: Option<String>,
}

impl ComplianceAction {
    /// Export header order.
    pub const FIELDS: &'static [&'static str] = &[
        "fei_number",
        "firm_name",
        "product_type",
        "center",
        "action_type",
        "action_taken_date",
        "state",
        "case_injunction_id",
    ];

    pub fn field_values(&self) -> Vec<String> {
        vec![
            text(&self.fei_number),
            text(&self.firm_name),
            text(&self.product_type),
            text(&self.center),
            text(&self.action_type),
            text(&self.action_taken_date),
            text(&self.state),
            text(&self.case_injunction_id),
        ]
    }
}

/// One recall notice, from an openFDA food-enforcement result object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecallNotice {
    pub recall_number: Option<String>,
    pub event_id: Option<u64>,
    pub status: Option<String>,
    pub classification: Option<String>,
    pub product_type: Option<String>,
    pub recalling_firm: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub product_description: Option<String>,
    pub reason_for_recall: Option<String>,
    pub voluntary_mandated: Option<String>,
    pub distribution_pattern: Option<String>,
    pub recall_initiation_date: Option<NaiveDate>,
    pub report_date: Option<NaiveDate>,
}

impl RecallNotice {
    /// Export header order.
    pub const FIELDS: &'static [&'static str] = &[
        "recall_number",
        "event_id",
        "status",
        "classification",
        "product_type",
        "recalling_firm",
        "city",
        "state",
        "country",
        "product_description",
        "reason_for_recall",
        "voluntary_mandated",
        "distribution_pattern",
        "recall_initiation_date",
        "report_date",
    ];

    pub fn field_values(&self) -> Vec<String> {
        vec![
            text(&self.recall_number),
            text(&self.event_id),
            text(&self.status),
            text(&self.classification),
            text(&self.product_type),
            text(&self.recalling_firm),
            text(&self.city),
            text(&self.state),
            text(&self.country),
            text(&self.product_description),
            text(&self.reason_for_recall),
            text(&self.voluntary_mandated),
            text(&self.distribution_pattern),
            text(&self.recall_initiation_date),
            text(&self.report_date),
        ]
    }
}

fn text<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_values_align_with_field_order() {
        let record = ComplianceAction {
            fei_number: Some(3001234567),
            firm_name: Some("Acme Foods".to_string()),
            action_taken_date: NaiveDate::from_ymd_opt(2019, 7, 2),
            ..Default::default()
        };

        let values = record.field_values();
        assert_eq!(values.len(), ComplianceAction::FIELDS.len());
        assert_eq!(values[0], "3001234567");
        assert_eq!(values[1], "Acme Foods");
        assert_eq!(values[5], "2019-07-02");
    }

    #[test]
    fn recall_values_align_with_field_order() {
        let record = RecallNotice {
            recall_number: Some("F-1234-2020".to_string()),
            event_id: Some(81234),
            report_date: NaiveDate::from_ymd_opt(2020, 3, 11),
            ..Default::default()
        };

        let values = record.field_values();
        assert_eq!(values.len(), RecallNotice::FIELDS.len());
        assert_eq!(values[0], "F-1234-2020");
        assert_eq!(values[1], "81234");
        assert_eq!(values[14], "2020-03-11");
    }

    #[test]
    fn absent_fields_render_empty() {
        let record = CanonicalRecord::Recall(RecallNotice::default());
        assert!(record.field_values().iter().all(String::is_empty));
    }
}
