//! Client configuration and region selection
//!
//! The region maps to a fixed upstream base URL. The mapping is an
//! exhaustive match so the unsupported-region failure stays total: a
//! value outside the enumeration can only enter through `FromStr`,
//! which rejects it with `Error::UnsupportedRegion`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Base URL served to EU-region subscriptions
pub const EU_REGION_URL: &str = "https://eu.api.fpjs.io/";

/// Base URL served to all other subscriptions
pub const GLOBAL_REGION_URL: &str = "https://api.fpjs.io/";

/// Geographic API endpoint selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Eu,
    Global,
}

impl Region {
    /// Resolve the region to its fixed upstream base URL
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Eu => EU_REGION_URL,
            Region::Global => GLOBAL_REGION_URL,
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eu" => Ok(Region::Eu),
            "global" => Ok(Region::Global),
            other => Err(Error::UnsupportedRegion {
                region: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Eu => write!(f, "eu"),
            Region::Global => write!(f, "global"),
        }
    }
}

/// Immutable client configuration
///
/// Created once at client construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Opaque server API credential, sent as the `Auth-Token` header
    pub api_token: String,

    /// Region selecting which upstream host serves requests
    pub region: Region,
}

impl Config {
    /// Create a configuration from a token and region
    pub fn new(api_token: impl Into<String>, region: Region) -> Self {
        Self {
            api_token: api_token.into(),
            region,
        }
    }
}
