//! Error kinds raised by the price pipeline.
//!
//! Configuration gaps are reported as [`PipelineError::MissingConfig`] and each
//! stage decides whether that degrades to an empty result or a failure status.
//! The remaining kinds are fatal for the run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// A configuration key needed by a stage is absent.
    #[error("Missing configuration key: {0}")]
    MissingConfig(&'static str),

    /// The market payload lacks a field the extractor reads.
    #[error("Market payload is missing field: {0}")]
    MissingField(String),

    /// No maximum price exists over an empty quote set.
    #[error("Cannot format an empty set of quotes")]
    EmptyQuotes,

    /// The response body was not valid JSON.
    #[error("Market payload is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The configured auth header name or value cannot be sent over HTTP.
    #[error("Invalid auth header {0}")]
    InvalidHeader(String),
}
