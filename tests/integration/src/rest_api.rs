//! REST surface exercised across crates
//!
//! Drives the actix service with payloads built from the real dataset
//! and checks the store semantics that matter across a sync boundary:
//! additive overwrite, wholesale event replacement, and leader
//! clearing.

use actix_web::{App, test, web};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use atlas_data::StaticCountryDataset;
use atlas_model::{CountryDetail, CountryRecord, SyncPayload};
use atlas_server::{AppState, routes};
use atlas_store::CountryRecordStore;

fn empty_state(data_dir: &TempDir) -> web::Data<AppState> {
    web::Data::new(AppState::new(CountryRecordStore::new(), data_dir.path()))
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(routes::configure),
        )
        .await
    };
}

macro_rules! post_sync {
    ($app:expr, $payload:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/sync-countries")
            .set_json($payload)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert!(resp.status().is_success());
    }};
}

#[actix_web::test]
async fn test_dataset_sync_then_read_back() {
    let dir = TempDir::new().unwrap();
    let app = test_app!(empty_state(&dir));

    let dataset = StaticCountryDataset::assemble().unwrap();
    post_sync!(&app, &SyncPayload::from_dataset(dataset.all()));

    let req = test::TestRequest::get().uri("/api/countries").to_request();
    let records: Vec<CountryRecord> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(records.len(), dataset.len());

    // Insertion order of the store follows payload order.
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, dataset.all_codes());
}

#[actix_web::test]
async fn test_partial_resync_retains_absent_codes() {
    let dir = TempDir::new().unwrap();
    let app = test_app!(empty_state(&dir));

    let dataset = StaticCountryDataset::assemble().unwrap();
    post_sync!(&app, &SyncPayload::from_dataset(dataset.all()));

    // Re-sync only France, with a changed population.
    let mut fra = dataset.get_by_code("fra").unwrap().clone();
    fra.population += 1;
    post_sync!(&app, &SyncPayload::from_dataset([&fra]));

    // France took the overwrite.
    let req = test::TestRequest::get()
        .uri("/api/countries/fra")
        .to_request();
    let record: CountryRecord = test::call_and_read_body_json(&app, req).await;
    assert_eq!(record.population, fra.population);

    // Codes absent from the partial payload are still served.
    let req = test::TestRequest::get()
        .uri("/api/countries/usa")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_resync_replaces_events_and_clears_leader() {
    let dir = TempDir::new().unwrap();
    let app = test_app!(empty_state(&dir));

    let dataset = StaticCountryDataset::assemble().unwrap();
    post_sync!(&app, &SyncPayload::from_dataset(dataset.all()));

    // Strip usa down to a bare record: no events, no leader.
    let mut usa = dataset.get_by_code("usa").unwrap().clone();
    usa.events.clear();
    usa.leader = None;
    post_sync!(&app, &SyncPayload::from_dataset([&usa]));

    let req = test::TestRequest::get()
        .uri("/api/countries/usa/with-events")
        .to_request();
    let detail: CountryDetail = test::call_and_read_body_json(&app, req).await;
    assert!(detail.events.is_empty());
    assert!(detail.leader.is_none());

    let req = test::TestRequest::get()
        .uri("/api/countries/usa/leader")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_country_file_round_trips_authored_module() {
    let dir = TempDir::new().unwrap();
    let app = test_app!(empty_state(&dir));

    let dataset = StaticCountryDataset::assemble().unwrap();
    let jpn = dataset.get_by_code("jpn").unwrap();
    let content = atlas_data::to_authored_toml(jpn).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/country-file")
        .set_json(serde_json::json!({
            "path": atlas_data::module_rel_path("jpn"),
            "content": content,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let written =
        std::fs::read_to_string(dir.path().join("countries").join("jpn.toml")).unwrap();
    let reparsed: atlas_model::CountryData = toml::from_str(&written).unwrap();
    assert_eq!(&reparsed, jpn);
}
