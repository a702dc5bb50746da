//! Error types for atlas-server

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

/// Acknowledgement body for mutation endpoints and error replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Country not found: {code}")]
    NotFound { code: String },

    #[error(transparent)]
    Data(#[from] atlas_data::Error),

    #[error("Store lock poisoned")]
    StorePoisoned,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            // Path restriction violations are the caller's fault.
            Self::Data(atlas_data::Error::InvalidPath { .. }) => StatusCode::BAD_REQUEST,
            Self::Data(_) | Self::StorePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Ack::err(self.to_string()))
    }
}
