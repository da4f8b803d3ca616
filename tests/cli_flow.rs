mod common;

use std::fs;

use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("fdadata").expect("fdadata binary should build")
}

#[test]
fn sources_lists_builtin_identifiers() {
    cli()
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("CITATIONS"))
        .stdout(predicate::str::contains("USFDA_RECALL"));
}

#[test]
fn fetch_compliance_writes_the_flat_export() {
    let dir = TempDir::new().unwrap();
    let input = common::write_sample_spreadsheet(dir.path());
    let out = dir.path().join("citations.csv");

    cli()
        .current_dir(dir.path())
        .args(["fetch", "CITATIONS"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 records"));

    let exported = fs::read_to_string(&out).unwrap();
    let mut lines = exported.lines();
    assert_eq!(
        lines.next(),
        Some(
            "fei_number,firm_name,product_type,center,action_type,action_taken_date,state,case_injunction_id"
        )
    );
    assert_eq!(lines.count(), 3);
    assert!(exported.contains("Acme Foods"));
}

#[test]
fn fetch_unknown_source_fails() {
    let dir = TempDir::new().unwrap();
    cli()
        .current_dir(dir.path())
        .args(["fetch", "NOPE", "--out", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown source 'NOPE'"));
}

#[test]
fn fetch_recall_pages_through_the_configured_endpoint() {
    let mut server = mockito::Server::new();
    let _meta = server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("limit".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::enforcement_meta_body(4))
        .create();
    let _page0 = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::enforcement_page_body(0, 2))
        .create();
    let _page1 = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skip".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::enforcement_page_body(2, 2))
        .create();

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("fdadata.toml");
    fs::write(
        &config_path,
        format!("[recall]\napi_url = \"{}\"\npage_limit = 2\ntimeout_secs = 5\n", server.url()),
    )
    .unwrap();
    let out = dir.path().join("recalls.csv");

    cli()
        .current_dir(dir.path())
        .args(["fetch", "USFDA_RECALL"])
        .arg("--config")
        .arg(&config_path)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 records"))
        .stdout(predicate::str::contains("2020-03-11"));

    let exported = fs::read_to_string(&out).unwrap();
    assert_eq!(exported.lines().count(), 5);
    assert!(exported.lines().nth(1).unwrap().starts_with("F-00000-2020"));
}
