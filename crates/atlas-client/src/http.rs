//! HTTP implementation of the CountryApi boundary

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use atlas_model::{CountryDetail, CountryRecord, PoliticalLeader, SyncPayload};

use crate::api::{Ack, CountryApi};
use crate::error::{Error, Result};

/// Client for the backend's JSON API.
#[derive(Debug, Clone)]
pub struct HttpCountryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCountryApi {
    /// Create a client for a base URL like `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON body, mapping 404 to `NotFound` for `code`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, code: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                code: code.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(Error::transport(format!(
                "unexpected status {} from {url}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// POST a JSON body and interpret the `{success, message}` reply.
    async fn post_ack<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Ack> {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        // Both success and failure replies carry an acknowledgement
        // body; prefer its message over a bare status code.
        match response.json::<Ack>().await {
            Ok(ack) if ack.success => Ok(ack),
            Ok(ack) => Err(Error::api(ack.message)),
            Err(_) if status.is_success() => {
                Err(Error::transport(format!("malformed acknowledgement from {url}")))
            }
            Err(_) => Err(Error::transport(format!(
                "unexpected status {status} from {url}"
            ))),
        }
    }
}

#[async_trait]
impl CountryApi for HttpCountryApi {
    async fn list_countries(&self) -> Result<Vec<CountryRecord>> {
        self.get_json("/api/countries", "").await
    }

    async fn get_country(&self, code: &str) -> Result<CountryRecord> {
        self.get_json(&format!("/api/countries/{code}"), code).await
    }

    async fn get_country_with_events(&self, code: &str) -> Result<CountryDetail> {
        self.get_json(&format!("/api/countries/{code}/with-events"), code)
            .await
    }

    async fn get_leader(&self, code: &str) -> Result<PoliticalLeader> {
        self.get_json(&format!("/api/countries/{code}/leader"), code)
            .await
    }

    async fn search_countries(&self, query: &str) -> Result<Vec<CountryRecord>> {
        let url = self.url("/api/search");
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::transport(format!(
                "unexpected status {} from {url}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    async fn sync_countries(&self, payload: SyncPayload) -> Result<Ack> {
        self.post_ack("/api/sync-countries", &payload).await
    }

    async fn put_country_file(&self, path: &str, content: &str) -> Result<Ack> {
        self.post_ack(
            "/api/country-file",
            &json!({ "path": path, "content": content }),
        )
        .await
    }
}
