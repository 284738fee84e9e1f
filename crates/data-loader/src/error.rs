//! Error types for the data-loader crate.
//!
//! Loading the developer list is the only fallible step in the whole
//! application, so every way it can go wrong lives in one enum here.

use thiserror::Error;

/// Errors that can occur while loading developer records
///
/// The `#[derive(Error)]` macro from thiserror implements `Display` and
/// `std::error::Error` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Local data file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response (connect error, timeout, ...)
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status
    #[error("Endpoint {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not a JSON array of developer records
    #[error("Malformed developer JSON from {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record field had a value we cannot use
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
