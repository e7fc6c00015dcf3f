//! Integration tests for staroil-core
//!
//! These tests exercise the context wiring and both store backends end to
//! end: the seeded in-memory fleet (demo mode) and the JSON document
//! collection on disk.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use tempfile::TempDir;

use staroil_core::adapters::seed::demo_stations;
use staroil_core::adapters::DocumentStationStore;
use staroil_core::domain::result::Error;
use staroil_core::ports::StationStore;
use staroil_core::{PriceChange, StaroilContext};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a staroil directory with demo mode configured
fn demo_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"app": {"demoMode": true}}"#,
    )
    .unwrap();
    dir
}

/// Create a staroil directory backed by a seeded document collection
fn seeded_document_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let store = DocumentStationStore::open(dir.path()).unwrap();
    store.seed(&demo_stations()).unwrap();
    dir
}

// ============================================================================
// Backend Equivalence
// ============================================================================

/// The two backends are interchangeable: every read query returns the same
/// data over the same seed.
#[test]
fn test_backends_answer_queries_identically() {
    let demo_dir = demo_dir();
    let documents_dir = seeded_document_dir();
    let demo = StaroilContext::new(demo_dir.path()).unwrap();
    let documents = StaroilContext::new(documents_dir.path()).unwrap();

    assert!(demo.config.demo_mode);
    assert!(!documents.config.demo_mode);

    let demo_all = demo.query_service.list_all().unwrap();
    let documents_all = documents.query_service.list_all().unwrap();
    assert_eq!(demo_all, documents_all);

    for token in ["MI", "Milano", "to", "XX"] {
        let a = demo.query_service.province_levels(token).unwrap();
        let b = documents.query_service.province_levels(token).unwrap();
        assert_eq!(a.totals, b.totals, "totals differ for {}", token);
        assert_eq!(a.stations.len(), b.stations.len());
    }
}

#[test]
fn test_demo_context_serves_seeded_fleet() {
    let ctx = StaroilContext::new(demo_dir().path()).unwrap();

    let all = ctx.query_service.list_all().unwrap();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].name, "Iperstaroil Milano Nord");

    let summary = ctx.query_service.province_levels("MI").unwrap();
    assert_eq!(summary.totals.benzina, 20000.0);
    assert_eq!(summary.totals.diesel, 22000.0);
}

// ============================================================================
// End-to-End Price Updates
// ============================================================================

/// A committed price update over the document collection survives a context
/// reopen; fuel levels and the other fuel's price are untouched.
#[test]
fn test_price_update_persists_across_reopen() {
    let dir = seeded_document_dir();

    {
        let ctx = StaroilContext::new(dir.path()).unwrap();
        let outcome = ctx
            .price_service
            .update_province_prices(
                "MI",
                PriceChange {
                    benzina: Some(1.999),
                    diesel: None,
                },
            )
            .unwrap();
        assert_eq!(outcome.applied, 2);
    }

    let reopened = StaroilContext::new(dir.path()).unwrap();
    for station in reopened.store.get_by_province("Milano").unwrap() {
        assert_eq!(station.price_benzina, 1.999);
    }
    let first = reopened.query_service.get_one(1).unwrap();
    assert_eq!(first.price_diesel, 1.829);
    assert_eq!(first.fuel_level.benzina, 12000.0);
}

#[test]
fn test_price_update_error_paths_through_context() {
    let ctx = StaroilContext::new(demo_dir().path()).unwrap();

    let err = ctx
        .price_service
        .update_province_prices("MI", PriceChange::default())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err = ctx
        .price_service
        .update_province_prices(
            "Palermo",
            PriceChange {
                diesel: Some(1.7),
                benzina: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

// ============================================================================
// Wire Shapes
// ============================================================================

/// The JSON crossing the boundary keeps the canonical field names
#[test]
fn test_canonical_wire_shapes() {
    let ctx = StaroilContext::new(demo_dir().path()).unwrap();

    let summary = ctx.query_service.province_levels("NA").unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["provincia"], "NA");
    assert_eq!(json["distributori"][0]["nome"], "Iperstaroil Napoli Ovest");
    assert_eq!(json["totali_litri"]["benzina"], 3000.0);
    assert_eq!(json["distributori"][0]["prezzi"]["diesel"], 1.839);

    let geo = ctx.query_service.geo_collection().unwrap();
    let json = serde_json::to_value(&geo).unwrap();
    assert_eq!(json["type"], "FeatureCollection");
    assert_eq!(json["features"][3]["geometry"]["coordinates"][0], 12.62);
    assert_eq!(json["features"][3]["geometry"]["coordinates"][1], 41.909);
}
