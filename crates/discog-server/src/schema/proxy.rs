//! Proxy-event request/response types.
//!
//! These mirror the API-Gateway proxy integration envelope: the gateway
//! hands the function `{httpMethod, path, queryStringParameters, body}` and
//! expects `{statusCode, headers, body}` back, with `body` a JSON string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An incoming proxy event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(alias = "method")]
    pub http_method: String,
    pub path: String,
    /// `null` and missing are both treated as no parameters.
    #[serde(default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

/// The response handed back to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ProxyRequest {
    /// Builds a GET event with the given query parameters.
    pub fn get(path: &str, query: &[(&str, &str)]) -> Self {
        ProxyRequest {
            http_method: "GET".to_string(),
            path: path.to_string(),
            query_string_parameters: if query.is_empty() {
                None
            } else {
                Some(
                    query
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                )
            },
            body: None,
        }
    }
}
