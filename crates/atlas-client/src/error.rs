//! Error taxonomy for the client boundary
//!
//! Three kinds of failure cross the boundary: the code simply is not
//! there (`NotFound`), the transport broke (`Transport`), or the
//! backend answered with a non-success acknowledgement (`Api`).
//! Callers branch on `NotFound` — the admin surface turns it into a
//! create flow — and treat the other two alike.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Country not found: {code}")]
    NotFound { code: String },

    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Backend rejected request: {message}")]
    Api { message: String },
}

impl Error {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}
