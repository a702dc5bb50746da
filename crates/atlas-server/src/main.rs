//! Political Atlas backend server
//!
//! Serves the country record store over a thin JSON API. By default
//! the store is seeded from the compile-time authored dataset so the
//! map has data on first load.

use std::path::PathBuf;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use atlas_data::StaticCountryDataset;
use atlas_model::SyncPayload;
use atlas_server::{AppState, routes};
use atlas_store::CountryRecordStore;

#[derive(Debug, Parser)]
#[command(name = "atlas-server", about = "Political Atlas backend server")]
struct Args {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "ATLAS_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// Directory the country-file endpoint may write under.
    #[arg(long, env = "ATLAS_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Start with an empty store instead of seeding from the authored
    /// dataset.
    #[arg(long)]
    no_seed: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut store = CountryRecordStore::new();
    if !args.no_seed {
        let dataset = StaticCountryDataset::assemble().map_err(std::io::Error::other)?;
        store.apply_sync(SyncPayload::from_dataset(dataset.all()));
        info!(countries = store.len(), "seeded store from authored dataset");
    }

    let state = web::Data::new(AppState::new(store, args.data_dir));

    info!(bind = %args.bind, "starting atlas-server");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(&args.bind)?
    .run()
    .await
}
