//! Error types for the application layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown country '{id}'")]
    UnknownCountry { id: String },

    #[error(transparent)]
    Data(#[from] atlas_data::Error),

    #[error(transparent)]
    Client(#[from] atlas_client::Error),
}
