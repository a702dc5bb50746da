//! Process-boundary client for the Political Atlas
//!
//! Everything that talks to the record store from the UI side goes
//! through the [`CountryApi`] trait: over HTTP against the backend
//! ([`HttpCountryApi`]) or in-process against an embedded store
//! ([`LocalCountryApi`]). The [`reconciler::DatasetReconciler`] pushes
//! the authored dataset across that boundary, and [`cache::CountryCache`]
//! memoizes the read side until a sync invalidates it.

pub mod api;
pub mod cache;
pub mod error;
pub mod http;
pub mod local;
pub mod reconciler;

pub use api::CountryApi;
pub use cache::CountryCache;
pub use error::{Error, Result};
pub use http::HttpCountryApi;
pub use local::LocalCountryApi;
pub use reconciler::DatasetReconciler;
