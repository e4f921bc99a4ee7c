//! Error types for the digest pipeline.
//!
//! Each upstream service gets its own error enum so the pipeline can apply the
//! right recovery policy per stage: fetch and summarization errors are
//! recovered in-band (empty section, placeholder summary), while rate-lookup
//! (when required) and delivery errors abort the run.

use thiserror::Error;

/// Errors from the news-search API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("empty search query")]
    EmptyQuery,

    #[error("invalid search endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("news search request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from the summarization API.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("failed to build chat client: {0}")]
    Client(String),

    #[error("chat completion failed: {0}")]
    Api(String),

    #[error("chat completion returned no choices")]
    EmptyResponse,
}

/// Errors from the economic-data API.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("invalid rate endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate response contained no observations")]
    NoObservations,

    #[error("unparseable rate value {value:?}: {source}")]
    BadValue {
        value: String,
        source: std::num::ParseFloatError,
    },
}

/// Errors from the mail transport. All of these are terminal for the run.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mailbox address {address:?}: {source}")]
    Address {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
