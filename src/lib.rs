//! Async client for the FingerprintJS server API
//!
//! Fetches the identification history of a visitor from the upstream
//! visitor-identification service. The client holds an immutable
//! configuration (API token + region), composes the request URL,
//! attaches the `Auth-Token` header, and parses the JSON response.
//!
//! # Example
//!
//! ```no_run
//! use fpjs_server_api::{Client, Config, Region, VisitorHistoryFilter};
//!
//! # async fn example() -> fpjs_server_api::Result<()> {
//! let client = Client::new(Config::new("my-api-token", Region::Global))?;
//!
//! let filter = VisitorHistoryFilter {
//!     limit: Some(10),
//!     ..Default::default()
//! };
//! let history = client.get_visitor_history("abc123", Some(&filter)).await?;
//! println!("{} visits", history.visits.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::Client;
pub use config::{Config, Region, EU_REGION_URL, GLOBAL_REGION_URL};
pub use error::{Error, Result};
pub use types::{Visit, VisitorHistoryFilter, VisitorsResponse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
