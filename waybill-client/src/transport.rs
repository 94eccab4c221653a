//! Single-request executor.
//!
//! Exactly one authenticated HTTP call per [`ShippoClient::request`]
//! invocation: attach the token header, serialize the body, map any
//! transport failure or non-2xx status to [`ClientError`]. No retries,
//! no backoff - failures belong to the caller.

use reqwest::{header, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::ShippoConfig;
use crate::error::ClientError;

/// Authorization header scheme used by the Shippo API.
pub const AUTH_SCHEME: &str = "ShippoToken";

/// One outbound request, immutable once built.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    /// Path below the API base URL, e.g. `/shipments`.
    pub endpoint: String,
    pub body: Option<RequestBody>,
    pub query: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn post(endpoint: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: Method::POST,
            endpoint: endpoint.into(),
            body: Some(body),
            query: Vec::new(),
        }
    }

    /// POST with no payload (sub-actions like a batch purchase).
    pub fn post_empty(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn put(endpoint: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: Method::PUT,
            endpoint: endpoint.into(),
            body: Some(body),
            query: Vec::new(),
        }
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Append a query parameter, replacing an earlier value for the same
    /// key.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.query.retain(|(existing, _)| *existing != key);
        self.query.push((key, value.into()));
        self
    }
}

/// The three body shapes the upstream API accepts.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// A single JSON object.
    Object(Value),
    /// An array of JSON objects (batch sub-actions).
    Array(Vec<Value>),
    /// A bare array of object ids (batch shipment removal).
    Ids(Vec<String>),
}

impl RequestBody {
    /// Serialize any payload type into an object body.
    pub fn object<T: Serialize>(payload: &T) -> Result<Self, ClientError> {
        Ok(RequestBody::Object(serde_json::to_value(payload)?))
    }

    fn as_value(&self) -> Value {
        match self {
            RequestBody::Object(value) => value.clone(),
            RequestBody::Array(values) => Value::Array(values.clone()),
            RequestBody::Ids(ids) => Value::Array(ids.iter().cloned().map(Value::from).collect()),
        }
    }
}

/// Authenticated Shippo API client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ShippoClient {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl ShippoClient {
    pub fn new(config: &ShippoConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// Execute one request and parse the response body as JSON.
    ///
    /// An empty 2xx body (e.g. a 204 from a delete) comes back as
    /// `Value::Null`.
    pub async fn request(&self, spec: RequestSpec) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, spec.endpoint);
        let mut request = self.http.request(spec.method.clone(), &url).header(
            header::AUTHORIZATION,
            format!("{AUTH_SCHEME} {}", self.token.expose_secret()),
        );
        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(&body.as_value());
        }

        tracing::debug!(method = %spec.method, endpoint = %spec.endpoint, "Shippo API request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                endpoint = %spec.endpoint,
                "Shippo API request failed"
            );
            return Err(api_error(status, &text));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Connectivity self-test: fetch a single address. Any non-error
    /// response means the token works.
    pub async fn verify_credentials(&self) -> Result<(), ClientError> {
        self.request(RequestSpec::get("/addresses").with_query("results", "1"))
            .await
            .map(drop)
    }
}

/// Map a non-2xx response to the uniform API error, pulling the server's
/// description out of the body when it is there.
fn api_error(status: StatusCode, body: &str) -> ClientError {
    let detail = extract_detail(body);
    let message = detail.clone().unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    ClientError::Api {
        status: status.as_u16(),
        message,
        detail,
    }
}

/// Shippo error bodies are usually `{"detail": "..."}`; fall back to a
/// `message` field, then to the raw body.
fn extract_detail(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "message"] {
            if let Some(Value::String(text)) = map.get(key) {
                return Some(text.clone());
            }
        }
    }
    Some(body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_query_replaces_existing_keys() {
        let spec = RequestSpec::get("/addresses")
            .with_query("results", "25")
            .with_query("results", "100");
        assert_eq!(spec.query, vec![("results".to_string(), "100".to_string())]);
    }

    #[test]
    fn body_shapes_serialize_as_supplied() {
        let object = RequestBody::Object(json!({"carrier": "usps"}));
        assert_eq!(object.as_value(), json!({"carrier": "usps"}));

        let array = RequestBody::Array(vec![json!({"shipment": "s1"})]);
        assert_eq!(array.as_value(), json!([{"shipment": "s1"}]));

        let ids = RequestBody::Ids(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(ids.as_value(), json!(["a", "b"]));
    }

    #[test]
    fn extract_detail_prefers_the_detail_field() {
        assert_eq!(
            extract_detail(r#"{"detail": "Invalid token."}"#),
            Some("Invalid token.".to_string())
        );
        assert_eq!(
            extract_detail(r#"{"message": "boom"}"#),
            Some("boom".to_string())
        );
        assert_eq!(extract_detail("plain text"), Some("plain text".to_string()));
        assert_eq!(extract_detail("  "), None);
    }

    #[test]
    fn api_error_falls_back_to_status_reason() {
        let err = api_error(StatusCode::NOT_FOUND, "");
        match err {
            ClientError::Api {
                status,
                message,
                detail,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
                assert!(detail.is_none());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
