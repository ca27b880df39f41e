//! Filter and response types for the visitors endpoint
//!
//! The response schema is owned by the upstream service; the structs
//! here are deliberately permissive (every field optional, unknown
//! fields preserved) so that schema evolution upstream never turns
//! into a parse failure here.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use url::form_urlencoded;

/// Optional query constraints narrowing a visitor history request
///
/// Field semantics (date ranges, limits) are defined by the upstream
/// API; values are passed through without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorHistoryFilter {
    /// Restrict the history to a single identification request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Restrict the history to visits carrying this linked id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_id: Option<String>,

    /// Maximum number of visits to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Return only visits before this timestamp (epoch milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
}

impl VisitorHistoryFilter {
    /// Serialize the set fields into a URL query string
    ///
    /// Fields are enumerated explicitly rather than reflected; an empty
    /// filter serializes to the empty string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(request_id) = &self.request_id {
            serializer.append_pair("request_id", request_id);
        }
        if let Some(linked_id) = &self.linked_id {
            serializer.append_pair("linked_id", linked_id);
        }
        if let Some(limit) = self.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        if let Some(before) = self.before {
            serializer.append_pair("before", &before.to_string());
        }
        serializer.finish()
    }
}

/// Response returned by the visitors endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorsResponse {
    /// Identifier of the visitor the history belongs to
    #[serde(rename = "visitorId", default, skip_serializing_if = "Option::is_none")]
    pub visitor_id: Option<String>,

    /// Recorded visits, newest first
    #[serde(default)]
    pub visits: Vec<Visit>,

    /// Timestamp of the last visit in the returned page
    #[serde(rename = "lastTimestamp", default, skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<i64>,

    /// Opaque key for requesting the next page, when the upstream returns one
    #[serde(rename = "paginationKey", default, skip_serializing_if = "Option::is_none")]
    pub pagination_key: Option<String>,

    /// Fields the upstream returns that this client does not model
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A single recorded visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    /// Identifier of the identification request that produced this visit
    #[serde(rename = "requestId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Caller-supplied linked id, if one was sent with the request
    #[serde(rename = "linkedId", default, skip_serializing_if = "Option::is_none")]
    pub linked_id: Option<String>,

    /// Visit timestamp (epoch milliseconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Remaining visit payload, passed through unmodified
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_serializes_to_empty_string() {
        assert_eq!(VisitorHistoryFilter::default().to_query_string(), "");
    }

    #[test]
    fn test_single_field_filter() {
        let filter = VisitorHistoryFilter {
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(filter.to_query_string(), "limit=10");
    }

    #[test]
    fn test_full_filter_uses_wire_names() {
        let filter = VisitorHistoryFilter {
            request_id: Some("req-1".to_string()),
            linked_id: Some("order 42".to_string()),
            limit: Some(5),
            before: Some(1_700_000_000_000),
        };
        let query = filter.to_query_string();
        assert!(query.contains("request_id=req-1"));
        assert!(query.contains("linked_id=order+42"));
        assert!(query.contains("limit=5"));
        assert!(query.contains("before=1700000000000"));
    }

    #[test]
    fn test_response_parses_permissively() {
        let body = json!({
            "visitorId": "abc123",
            "visits": [
                {
                    "requestId": "req-1",
                    "timestamp": 1700000000000i64,
                    "browserDetails": { "browserName": "Firefox" }
                }
            ],
            "lastTimestamp": 1700000000000i64,
            "someFutureField": true
        });

        let response: VisitorsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.visitor_id.as_deref(), Some("abc123"));
        assert_eq!(response.visits.len(), 1);
        assert_eq!(response.visits[0].request_id.as_deref(), Some("req-1"));
        assert!(response.visits[0].extra.contains_key("browserDetails"));
        assert!(response.extra.contains_key("someFutureField"));
    }

    #[test]
    fn test_response_parses_with_no_modeled_fields() {
        let response: VisitorsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.visitor_id.is_none());
        assert!(response.visits.is_empty());
    }
}
