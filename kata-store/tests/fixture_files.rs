use kata_domain::sample;
use kata_store::{load_company, CompanyFixture, StoreError};
use std::fs;
use std::path::PathBuf;

fn bundled_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures/company.json")
}

#[test]
fn test_bundled_fixture_matches_sample_company() {
    let loaded = load_company(&bundled_fixture()).unwrap();
    assert_eq!(loaded, sample::company().unwrap());
}

#[test]
fn test_bundled_fixture_totals() {
    let company = load_company(&bundled_fixture()).unwrap();
    let totals = company.total_order_values_by_city();
    assert_eq!(totals["London"], 446.25);
    assert_eq!(totals["Liphook"], 857.0);
}

#[test]
fn test_fixture_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"{ "name": "Tiny", "customers": [ { "name": "Ann", "city": "Leeds",
            "orders": [ { "line_items": [ { "name": "cup", "value": 2.5, "quantity": 2 } ] } ] } ] }"#,
    )
    .unwrap();

    let company = load_company(&path).unwrap();
    assert_eq!(company.customer_named("Ann").unwrap().total_order_value(), 5.0);
    assert!(company.suppliers().is_empty());
}

#[test]
fn test_truncated_file_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "name": "Broken", "customers": [ "#).unwrap();

    assert!(matches!(CompanyFixture::read(&path), Err(StoreError::Json(_))));
}
