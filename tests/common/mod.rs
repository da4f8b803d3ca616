//! Shared fixtures for fdadata integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};

pub const SPREADSHEET_HEADER: &str =
    "FEI Number,Firm Name,Product Type,Center,Action Type,Action Taken Date,State,Case Injunction ID";

pub const SPREADSHEET_ROWS: &[&str] = &[
    "3001234567.0,Acme Foods,Food,CFSAN,Warning Letter,07/02/2019,CA,",
    "3007654321.0,Bolt Dairy,Food,CFSAN,Seizure,11/20/2019,WI,INJ-22",
    ",Carver Labs,Drugs,CDER,Injunction,01/05/2020,NY,INJ-31",
];

/// Write a small compliance-actions spreadsheet export under `dir`.
#[allow(dead_code)]
pub fn write_sample_spreadsheet(dir: &Path) -> PathBuf {
    let path = dir.join("compliance_actions.csv");
    let mut file = std::fs::File::create(&path).expect("failed to create sample spreadsheet");
    writeln!(file, "{}", SPREADSHEET_HEADER).unwrap();
    for row in SPREADSHEET_ROWS {
        writeln!(file, "{}", row).unwrap();
    }
    path
}

/// Metadata envelope as the enforcement endpoint reports it.
#[allow(dead_code)]
pub fn enforcement_meta_body(total: u64) -> String {
    serde_json::json!({
        "meta": {
            "last_updated": "2020-03-11",
            "results": {"skip": 0, "limit": 1, "total": total}
        },
        "results": [{"recall_number": "F-00000-2020"}]
    })
    .to_string()
}

/// One page of enforcement results starting at `skip`.
#[allow(dead_code)]
pub fn enforcement_page_body(skip: u64, count: u64) -> String {
    let results: Vec<serde_json::Value> = (skip..skip + count)
        .map(|i| {
            serde_json::json!({
                "recall_number": format!("F-{:05}-2020", i),
                "event_id": i,
                "status": "Ongoing",
                "classification": "Class I",
                "recalling_firm": "Acme Foods",
                "report_date": "20200311"
            })
        })
        .collect();
    serde_json::json!({"results": results}).to_string()
}
