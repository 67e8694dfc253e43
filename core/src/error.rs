//! Error taxonomy for the countries pipeline.
//!
//! # Design
//! One variant per failure kind, each carrying only what the user-facing
//! message needs (a status code or the wrapped cause). Causes sit behind
//! `Arc` so the error, and the `LoadingState` holding it, stays `Clone`.
//! Every failure is terminal for the attempt that produced it; retrying is
//! the caller's decision.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Shared, type-erased transport failure.
pub type Cause = Arc<dyn StdError + Send + Sync>;

/// Errors produced anywhere between URL construction and domain mapping.
#[derive(Debug, Clone, Error)]
pub enum CountryError {
    #[error("The request URL is invalid.")]
    InvalidUrl(#[source] url::ParseError),

    /// Not produced by `HttpFetcher`, which reports an empty body as
    /// `Decoding`; available to fetchers whose transport can finish without
    /// a payload.
    #[error("No data was received from the server.")]
    NoData,

    #[error("The data could not be decoded: {0}")]
    Decoding(#[source] Arc<serde_json::Error>),

    #[error("Server error (code {status}).")]
    Server { status: u16 },

    #[error("Network error: {0}")]
    Network(#[source] Cause),

    #[error("An unknown error occurred.")]
    Unknown,
}

/// Fieldless discriminant of `CountryError`, for logging and FFI codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    NoData,
    Decoding,
    Server,
    Network,
    Unknown,
}

impl CountryError {
    pub fn network(cause: impl StdError + Send + Sync + 'static) -> Self {
        CountryError::Network(Arc::new(cause))
    }

    pub fn decoding(cause: serde_json::Error) -> Self {
        CountryError::Decoding(Arc::new(cause))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CountryError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            CountryError::NoData => ErrorKind::NoData,
            CountryError::Decoding(_) => ErrorKind::Decoding,
            CountryError::Server { .. } => ErrorKind::Server,
            CountryError::Network(_) => ErrorKind::Network,
            CountryError::Unknown => ErrorKind::Unknown,
        }
    }

    /// HTTP status carried by `Server`, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CountryError::Server { status } => Some(*status),
            _ => None,
        }
    }

    /// What the user can do about it. Shown under the description in the
    /// failure view, next to the retry action.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            CountryError::InvalidUrl(_) => Some("Check the URL and try again."),
            CountryError::NoData => Some("Check your Internet connection."),
            CountryError::Decoding(_) => Some("The received data is invalid."),
            CountryError::Server { .. } => {
                Some("The server is having trouble. Try again later.")
            }
            CountryError::Network(_) => Some("Check your Internet connection and try again."),
            CountryError::Unknown => Some("Please try again."),
        }
    }
}
