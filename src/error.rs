//! Error types for the server API client
//!
//! A small, closed taxonomy using thiserror for the public enum and
//! anyhow to carry underlying causes on request failures.

use thiserror::Error;

/// Main error type for client operations
#[derive(Error, Debug)]
pub enum Error {
    /// Client constructed with an unusable configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A required call argument was missing or malformed
    #[error("Invalid argument: {field} - {message}")]
    InvalidArgument { field: &'static str, message: String },

    /// Region value outside the known enumeration
    #[error("Unsupported region: {region}")]
    UnsupportedRegion { region: String },

    /// Network, transport, or response-parsing failure
    #[error("Request failed: {message}")]
    RequestFailed {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
