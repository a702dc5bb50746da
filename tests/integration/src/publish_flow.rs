//! Admin publish round trip
//!
//! Seeds a session from the authored dataset, publishes it through the
//! full save-then-sync path, and checks the record comes back intact
//! from a fresh store read.

use std::sync::Arc;
use std::sync::RwLock;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use atlas_app::{AdminEditSession, PublishOutcome};
use atlas_client::{CountryApi, CountryCache, DatasetReconciler, LocalCountryApi};
use atlas_data::StaticCountryDataset;
use atlas_model::CountryData;
use atlas_store::CountryRecordStore;

struct Fixture {
    api: Arc<dyn CountryApi>,
    reconciler: DatasetReconciler,
    store: Arc<RwLock<CountryRecordStore>>,
    dataset: Arc<StaticCountryDataset>,
    temp: TempDir,
}

fn fixture() -> Fixture {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(RwLock::new(CountryRecordStore::new()));
    let api: Arc<dyn CountryApi> = Arc::new(LocalCountryApi::new(store.clone(), temp.path()));
    let cache = Arc::new(CountryCache::new(api.clone()));
    let dataset = Arc::new(StaticCountryDataset::assemble().unwrap());
    let reconciler = DatasetReconciler::new(dataset.clone(), api.clone(), cache);

    Fixture {
        api,
        reconciler,
        store,
        dataset,
        temp,
    }
}

#[tokio::test]
async fn test_zero_change_publish_reproduces_record() {
    let f = fixture();
    let session = AdminEditSession::open(&f.dataset, "usa").unwrap();

    let outcome = session.publish(f.api.as_ref(), &f.reconciler).await.unwrap();
    assert!(matches!(outcome, PublishOutcome::Published));

    // The authored module on disk parses back to the exact draft.
    let written = std::fs::read_to_string(f.temp.path().join("countries/usa.toml")).unwrap();
    let reparsed: CountryData = toml::from_str(&written).unwrap();
    assert_eq!(&reparsed, session.draft());

    // A fresh store read matches the original projection.
    let (record, events, leader) = f.dataset.get_by_code("usa").unwrap().project();
    let detail = f
        .api
        .get_country_with_events("usa")
        .await
        .unwrap();
    assert_eq!(detail.country, record);
    assert_eq!(detail.events, events);
    assert_eq!(detail.leader, leader);
}

#[tokio::test]
async fn test_validation_failure_writes_nothing() {
    let f = fixture();

    let mut session = AdminEditSession::open(&f.dataset, "usa").unwrap();
    session.draft_mut().capital.clear();
    session.draft_mut().population = 0;

    let outcome = session.publish(f.api.as_ref(), &f.reconciler).await.unwrap();
    let PublishOutcome::ValidationFailed(errors) = outcome else {
        panic!("expected ValidationFailed");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["capital", "population"]);

    assert!(!f.temp.path().join("countries").exists());
    assert!(f.store.read().unwrap().is_empty());
}

#[tokio::test]
async fn test_edited_publish_is_served_immediately() {
    let f = fixture();

    let mut session = AdminEditSession::open(&f.dataset, "usa").unwrap();
    session.draft_mut().name = "Renamed States".to_string();
    session.draft_mut().population += 1;

    let outcome = session.publish(f.api.as_ref(), &f.reconciler).await.unwrap();
    assert!(matches!(outcome, PublishOutcome::Published));

    // The store serves the edit right away, not the assembled original.
    let record = f.api.get_country("usa").await.unwrap();
    assert_eq!(record.name, "Renamed States");
    assert_eq!(record.population, session.draft().population);

    // Untouched countries are still served alongside the edit.
    assert!(f.api.get_country("jpn").await.is_ok());
}

#[tokio::test]
async fn test_new_country_publish_lands_on_disk() {
    let f = fixture();

    let mut session = AdminEditSession::open(&f.dataset, "new").unwrap();
    {
        let draft = session.draft_mut();
        draft.code = "zzx".to_string();
        draft.name = "Zyzzyxia".to_string();
        draft.capital = "Zyz City".to_string();
        draft.population = 12_345;
        draft.region = "Oceania".to_string();
    }

    let outcome = session.publish(f.api.as_ref(), &f.reconciler).await.unwrap();
    assert!(matches!(outcome, PublishOutcome::Published));

    let written = std::fs::read_to_string(f.temp.path().join("countries/zzx.toml")).unwrap();
    let reparsed: CountryData = toml::from_str(&written).unwrap();
    assert_eq!(reparsed.name, "Zyzzyxia");

    // The new code is queryable without waiting for a reassembly.
    let record = f.api.get_country("zzx").await.unwrap();
    assert_eq!(record.name, "Zyzzyxia");
}
