//! HTTP route handlers

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{debug, warn};

use atlas_data::files;
use atlas_model::SyncPayload;

use crate::error::{Ack, Error, Result};
use crate::state::AppState;

/// Mount every API route on a service config.
///
/// Malformed JSON bodies are answered with the same `{success,
/// message}` acknowledgement shape the mutation endpoints use.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let ack = Ack::err(format!("malformed request body: {err}"));
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ack),
        )
        .into()
    });

    cfg.app_data(json_config).service(
        web::scope("/api")
            .route("/countries", web::get().to(list_countries))
            .route("/countries/{code}", web::get().to(get_country))
            .route("/countries/{code}/events", web::get().to(get_events))
            .route(
                "/countries/{code}/with-events",
                web::get().to(get_with_events),
            )
            .route("/countries/{code}/leader", web::get().to(get_leader))
            .route("/search", web::get().to(search))
            .route("/sync-countries", web::post().to(sync_countries))
            .route("/country-file", web::post().to(put_country_file)),
    );
}

async fn list_countries(state: web::Data<AppState>) -> Result<HttpResponse> {
    let store = state.store.read().map_err(|_| Error::StorePoisoned)?;
    Ok(HttpResponse::Ok().json(store.list_countries()))
}

async fn get_country(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let code = path.into_inner();
    let store = state.store.read().map_err(|_| Error::StorePoisoned)?;
    match store.get_country(&code) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(Error::NotFound { code }),
    }
}

async fn get_events(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let code = path.into_inner();
    let store = state.store.read().map_err(|_| Error::StorePoisoned)?;
    match store.get_country_with_events(&code) {
        Some(detail) => Ok(HttpResponse::Ok().json(detail.events)),
        None => Err(Error::NotFound { code }),
    }
}

async fn get_with_events(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let code = path.into_inner();
    let store = state.store.read().map_err(|_| Error::StorePoisoned)?;
    match store.get_country_with_events(&code) {
        Some(detail) => Ok(HttpResponse::Ok().json(detail)),
        None => Err(Error::NotFound { code }),
    }
}

async fn get_leader(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let code = path.into_inner();
    let store = state.store.read().map_err(|_| Error::StorePoisoned)?;
    match store.get_leader(&code) {
        Some(leader) => Ok(HttpResponse::Ok().json(leader)),
        None => Err(Error::NotFound { code }),
    }
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let store = state.store.read().map_err(|_| Error::StorePoisoned)?;
    Ok(HttpResponse::Ok().json(store.search_countries(&query.q)))
}

async fn sync_countries(
    state: web::Data<AppState>,
    payload: web::Json<SyncPayload>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let count = payload.countries.len();

    let mut store = state.store.write().map_err(|_| Error::StorePoisoned)?;
    store.apply_sync(payload);

    debug!(countries = count, "sync applied");
    Ok(HttpResponse::Ok().json(Ack::ok(format!("synced {count} countries"))))
}

#[derive(Debug, Deserialize)]
struct CountryFileRequest {
    path: String,
    content: String,
}

async fn put_country_file(
    state: web::Data<AppState>,
    request: web::Json<CountryFileRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    let target = files::resolve_country_file(&state.data_dir, &request.path).inspect_err(|e| {
        warn!(path = %request.path, error = %e, "rejected country-file write");
    })?;
    files::write_atomic(&target, request.content.as_bytes())?;

    Ok(HttpResponse::Ok().json(Ack::ok(format!("wrote {}", request.path))))
}
