//! End-to-end selection scenarios
//!
//! Wires the real dataset, reconciler, store, and panels together and
//! walks the flows a user drives from the map: picking a country by
//! its display name, picking something that does not exist, and racing
//! two selections.

use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::time::sleep;

use atlas_app::{
    PanelKind, PanelState, SelectionArbiter, SelectionBus, SelectionPanel, SelectionSlot,
};
use atlas_client::api::Ack;
use atlas_client::{CountryApi, CountryCache, DatasetReconciler, LocalCountryApi, Result};
use atlas_data::StaticCountryDataset;
use atlas_model::{CountryDetail, CountryRecord, PoliticalLeader, SyncPayload};
use atlas_store::CountryRecordStore;

/// A fully reconciled in-process backend plus the temp dir its slot
/// and country files live under.
struct Fixture {
    api: Arc<dyn CountryApi>,
    temp: TempDir,
}

async fn seeded_fixture() -> Fixture {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(RwLock::new(CountryRecordStore::new()));
    let api: Arc<dyn CountryApi> = Arc::new(LocalCountryApi::new(store, temp.path()));
    let cache = Arc::new(CountryCache::new(api.clone()));

    let dataset = Arc::new(StaticCountryDataset::assemble().unwrap());
    DatasetReconciler::new(dataset, api.clone(), cache)
        .sync()
        .await
        .unwrap();

    Fixture { api, temp }
}

fn panel(fixture: &Fixture, kind: PanelKind) -> (SelectionPanel, Arc<SelectionArbiter>) {
    let arbiter = Arc::new(SelectionArbiter::new());
    let panel = SelectionPanel::new(
        kind,
        fixture.api.clone(),
        arbiter.clone(),
        SelectionSlot::new(fixture.temp.path().join("selection")),
    );
    (panel, arbiter)
}

#[tokio::test]
async fn test_united_states_by_display_name() {
    let fixture = seeded_fixture().await;
    let (panel, _) = panel(&fixture, PanelKind::Viewer);

    let ticket = panel.select("United States").unwrap();
    assert_eq!(ticket.code, "usa");
    panel.run_fetch(ticket).await;

    let PanelState::Ready { code, detail } = panel.state() else {
        panic!("expected Ready, got {:?}", panel.state());
    };
    assert_eq!(code, "usa");
    assert_eq!(detail.country.name, "United States");
    assert_eq!(detail.leader.unwrap().party, "Democratic Party");

    let orders: Vec<i64> = detail.events.iter().map(|e| e.order).collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();
    assert_eq!(orders, sorted);
    assert!(!orders.is_empty());
}

#[tokio::test]
async fn test_atlantis_is_synthetic_and_absent() {
    let fixture = seeded_fixture().await;

    let (viewer, _) = panel(&fixture, PanelKind::Viewer);
    let ticket = viewer.select("Atlantis").unwrap();
    assert_eq!(ticket.code, "atl");
    viewer.run_fetch(ticket).await;
    assert!(matches!(viewer.state(), PanelState::Errored { .. }));

    let (admin, _) = panel(&fixture, PanelKind::Admin);
    let ticket = admin.select("Atlantis").unwrap();
    admin.run_fetch(ticket).await;
    let PanelState::Missing { code } = admin.state() else {
        panic!("expected Missing, got {:?}", admin.state());
    };
    assert_eq!(code, "atl");
}

#[tokio::test]
async fn test_bus_event_drives_panel_selection() {
    let fixture = seeded_fixture().await;
    let (panel, _) = panel(&fixture, PanelKind::Viewer);

    let bus = SelectionBus::new();
    let mut events = bus.subscribe();
    bus.publish("Germany");

    let event = events.recv().await.unwrap();
    let ticket = panel.select(&event.raw_name).unwrap();
    assert_eq!(ticket.code, "deu");
    panel.run_fetch(ticket).await;
    assert!(matches!(panel.state(), PanelState::Ready { .. }));
}

#[tokio::test]
async fn test_selection_survives_panel_teardown() {
    let fixture = seeded_fixture().await;

    {
        let (panel, _) = panel(&fixture, PanelKind::Viewer);
        let ticket = panel.select("Japan").unwrap();
        panel.run_fetch(ticket).await;
    }

    // A fresh slot instance over the same path sees the selection.
    let slot = SelectionSlot::new(fixture.temp.path().join("selection"));
    assert_eq!(slot.load(), Some("jpn".to_string()));
}

/// Forwards to an inner api, counting detail fetches.
struct CountingApi {
    inner: Arc<dyn CountryApi>,
    detail_calls: AtomicUsize,
    delay: Option<Duration>,
}

#[async_trait]
impl CountryApi for CountingApi {
    async fn list_countries(&self) -> Result<Vec<CountryRecord>> {
        self.inner.list_countries().await
    }

    async fn get_country(&self, code: &str) -> Result<CountryRecord> {
        self.inner.get_country(code).await
    }

    async fn get_country_with_events(&self, code: &str) -> Result<CountryDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            if code == "usa" {
                sleep(delay).await;
            }
        }
        self.inner.get_country_with_events(code).await
    }

    async fn get_leader(&self, code: &str) -> Result<PoliticalLeader> {
        self.inner.get_leader(code).await
    }

    async fn search_countries(&self, query: &str) -> Result<Vec<CountryRecord>> {
        self.inner.search_countries(query).await
    }

    async fn sync_countries(&self, payload: SyncPayload) -> Result<Ack> {
        self.inner.sync_countries(payload).await
    }

    async fn put_country_file(&self, path: &str, content: &str) -> Result<Ack> {
        self.inner.put_country_file(path, content).await
    }
}

#[tokio::test]
async fn test_selecting_same_country_twice_fetches_once() {
    let fixture = seeded_fixture().await;
    let counting = Arc::new(CountingApi {
        inner: fixture.api.clone(),
        detail_calls: AtomicUsize::new(0),
        delay: None,
    });

    let arbiter = Arc::new(SelectionArbiter::new());
    let panel = SelectionPanel::new(
        PanelKind::Viewer,
        counting.clone(),
        arbiter,
        SelectionSlot::new(fixture.temp.path().join("selection")),
    );

    let ticket = panel.select("France").unwrap();
    panel.run_fetch(ticket).await;

    // Same country under two more spellings: no further fetch.
    assert!(panel.select("france").is_none());
    assert!(panel.select("FRA").is_none());

    assert_eq!(counting.detail_calls.load(Ordering::SeqCst), 1);
    assert!(matches!(panel.state(), PanelState::Ready { .. }));
}

#[tokio::test]
async fn test_fast_second_selection_wins_over_slow_first() {
    let fixture = seeded_fixture().await;
    let counting = Arc::new(CountingApi {
        inner: fixture.api.clone(),
        detail_calls: AtomicUsize::new(0),
        delay: Some(Duration::from_millis(50)),
    });

    let arbiter = Arc::new(SelectionArbiter::new());
    let panel = Arc::new(SelectionPanel::new(
        PanelKind::Viewer,
        counting,
        arbiter,
        SelectionSlot::new(fixture.temp.path().join("selection")),
    ));

    let slow = panel.select("United States").unwrap();
    let fast = panel.select("France").unwrap();

    let slow_task = tokio::spawn({
        let panel = panel.clone();
        async move { panel.run_fetch(slow).await }
    });
    let fast_task = tokio::spawn({
        let panel = panel.clone();
        async move { panel.run_fetch(fast).await }
    });
    slow_task.await.unwrap();
    fast_task.await.unwrap();

    let PanelState::Ready { code, .. } = panel.state() else {
        panic!("expected Ready, got {:?}", panel.state());
    };
    assert_eq!(code, "fra");
}
