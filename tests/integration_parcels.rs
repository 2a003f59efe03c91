// =====================================================================
// File: integration_parcels.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Integration tests for the parcel index. These tests exercise the
//   full end-to-end flow of the system, including:
//
//   - Writing a parcel data file and loading it through the ingest layer
//   - Skipping malformed and out-of-range lines without losing good ones
//   - Per-country queries through the public `ParcelIndex` API
//   - Driving the interactive menu from a scripted input
// =====================================================================
use std::path::PathBuf;

use parcelindex::index::hash_country;
use parcelindex::ingest::{LoadReport, load_file};
use parcelindex::{ParcelIndex, Session, WeightFilter, repl_loop};

/// Produces a fresh data file for one test and returns its path.
fn setup_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("parcelindex_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

const COURIERS: &str = "\
Canada, 500, 100
Canada, 200, 50
Canada, 800, 300
Peru, 1500, 700
peru, 1500, 20
Japan, 99, 40
Japan, 2500, 5000
this line is not a parcel

Chad, 450, 60
";


#[test]
fn test_load_skips_bad_lines() {
    let path = setup_file("load.txt", COURIERS);
    let mut index = ParcelIndex::new();

    let report = load_file(&mut index, &path).unwrap();
    assert_eq!(report, LoadReport { loaded: 6, skipped: 3 });
    assert_eq!(index.len(), 6);

    // Both Japan lines were out of range
    assert!(index.lookup_bucket("japan").is_none());

    std::fs::remove_file(path).unwrap();
}


#[test]
fn test_scenario_queries_after_load() {
    let path = setup_file("scenario.txt", "Canada, 500, 100\nCanada, 200, 50\nCanada, 800, 300\n");
    let mut index = ParcelIndex::new();
    load_file(&mut index, &path).unwrap();

    let weights: Vec<f64> = index.list_all("Canada").unwrap().map(|p| p.weight()).collect();
    assert_eq!(weights, vec![200.0, 500.0, 800.0]);

    let totals = index.totals("canada").unwrap();
    assert_eq!((totals.weight, totals.value), (1500.0, 450.0));

    let extremes = index.weight_extremes("canada").unwrap();
    assert_eq!((extremes.lowest.weight(), extremes.highest.weight()), (200.0, 800.0));

    let extremes = index.value_extremes("canada").unwrap();
    assert_eq!((extremes.lowest.value(), extremes.highest.value()), (50.0, 300.0));

    std::fs::remove_file(path).unwrap();
}


#[test]
fn test_case_variants_share_one_bucket() {
    let path = setup_file("case.txt", COURIERS);
    let mut index = ParcelIndex::new();
    load_file(&mut index, &path).unwrap();

    // "Peru" and "peru" normalize to the same key
    let peru = index.totals("PERU").unwrap();
    assert_eq!(peru.count, 2);
    assert_eq!(peru.value, 720.0);

    // Equal weights are both kept; first-seen wins the value tie-break order
    let heavier: Vec<f64> = index
        .list_by_weight("peru", 1000.0, WeightFilter::Heavier)
        .unwrap()
        .map(|p| p.value())
        .collect();
    assert_eq!(heavier, vec![700.0, 20.0]);

    std::fs::remove_file(path).unwrap();
}


#[test]
fn test_collision_merges_bucket_results() {
    // canada and chad share a bucket; queries do not split them
    assert_eq!(hash_country("canada"), hash_country("chad"));

    let path = setup_file("collide.txt", COURIERS);
    let mut index = ParcelIndex::new();
    load_file(&mut index, &path).unwrap();

    let canada = index.totals("canada").unwrap();
    let chad = index.totals("chad").unwrap();
    assert_eq!(canada, chad);
    assert_eq!(canada.count, 4);

    std::fs::remove_file(path).unwrap();
}


#[test]
fn test_scripted_session() {
    let path = setup_file("session.txt", COURIERS);
    let mut session = Session::from_file(&path).unwrap();
    assert_eq!(session.source.as_deref(), Some(path.as_path()));

    let script = "\
list peru
ADD Japan 1000 45
weight japan
filter canada 500 lighter
total narnia
bogus
exit
list canada
";
    let mut out = Vec::new();
    repl_loop(&mut session, script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Parcels for peru:"));
    assert!(text.contains("OK"));
    assert!(text.contains("Lightest:"));
    assert!(text.contains("Parcels for canada lighter than 500.00:"));
    assert!(text.contains("No parcels found for narnia."));
    assert!(text.contains("ERR: command 'BOGUS' not handled"));
    assert!(text.ends_with("Exiting...\n"));

    // Nothing after EXIT ran
    assert!(!text.contains("Parcels for canada:"));
    assert_eq!(session.report.loaded, 7);

    std::fs::remove_file(path).unwrap();
}


#[test]
fn test_missing_data_file() {
    let path = std::env::temp_dir().join("parcelindex_does_not_exist.txt");
    assert!(Session::from_file(&path).is_err());
}
