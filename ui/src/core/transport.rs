//! One HTTP request/response cycle against the console backend.
//!
//! Read requests (`GET`) carry their parameters in the query string and never
//! send a body; write requests (`POST`) carry the same mapping as an
//! `application/x-www-form-urlencoded` body and leave the URL bare.
//!
//! [`Transport::send`] resolves to exactly one outcome per request. Failures
//! are also surfaced to the user through [`Dialogs::alert`] before the error
//! is handed back, so callers only deal with the business meaning.
//! [`Transport::fetch`] is the quiet variant for listing reads.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use url::form_urlencoded;

use super::dialogs::Dialogs;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A request before encoding: endpoint, method and ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: String,
    pub method: Method,
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::Get,
            params: Vec::new(),
        }
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::Post,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params<K, V, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Resolves the endpoint against `base_url` and places the parameters
    /// according to the method.
    pub fn encode(&self, base_url: &str) -> EncodedRequest {
        let mut url = join_url(base_url, &self.endpoint);
        let encoded = encode_pairs(&self.params);

        match self.method {
            Method::Get => {
                if !encoded.is_empty() {
                    url.push(if url.contains('?') { '&' } else { '?' });
                    url.push_str(&encoded);
                }
                EncodedRequest {
                    method: Method::Get,
                    url,
                    body: None,
                    content_type: None,
                }
            }
            Method::Post => EncodedRequest {
                method: Method::Post,
                url,
                body: Some(encoded),
                content_type: Some(FORM_CONTENT_TYPE),
            },
        }
    }
}

/// Form-encodes `pairs` in order (`a=1&b=x+y`).
pub fn encode_pairs<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish()
}

fn join_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// A request ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub content_type: Option<&'static str>,
}

/// Whatever came back, before status interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response reachable (DNS, refused connection, CORS, aborted fetch).
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct NetworkError(pub String);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("request failed (status {code})")]
    Status { code: u16, status_text: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

/// The wire seam. Browser builds use [`ReqwestClient`]; tests swap in a fake.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn execute(&self, request: EncodedRequest) -> Result<RawResponse, NetworkError>;
}

#[derive(Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn execute(&self, request: EncodedRequest) -> Result<RawResponse, NetworkError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if let Some(content_type) = request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| NetworkError(err.to_string()))?;
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .text()
            .await
            .map_err(|err| NetworkError(err.to_string()))?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// Request helper bound to a base URL.
#[derive(Clone)]
pub struct Transport {
    client: Rc<dyn HttpClient>,
    base_url: String,
}

impl Transport {
    pub fn new(client: Rc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Performs one request. Non-2xx statuses, unreachable backends and
    /// undecodable bodies raise a blocking notification and come back as `Err`.
    pub async fn send(
        &self,
        request: &ApiRequest,
        dialogs: &dyn Dialogs,
    ) -> Result<Value, TransportError> {
        let result = self.exchange(request).await;
        if let Err(err) = &result {
            dialogs.alert(&err.notice()).await;
        }
        result
    }

    /// Same cycle as [`Transport::send`] without the notification. Background
    /// reads use it and show the error inline.
    pub async fn fetch(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        self.exchange(request).await
    }

    async fn exchange(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        let encoded = request.encode(&self.base_url);
        tracing::debug!(method = encoded.method.as_str(), url = %encoded.url, "dispatching request");

        let response = match self.client.execute(encoded).await {
            Ok(response) => response,
            Err(NetworkError(reason)) => {
                tracing::warn!(endpoint = %request.endpoint, %reason, "backend unreachable");
                return Err(TransportError::Network(reason));
            }
        };

        if !response.is_success() {
            tracing::warn!(
                endpoint = %request.endpoint,
                status = response.status,
                "request rejected"
            );
            return Err(TransportError::Status {
                code: response.status,
                status_text: response.status_text,
            });
        }

        serde_json::from_str::<Value>(&response.body).map_err(|err| {
            tracing::warn!(endpoint = %request.endpoint, error = %err, "undecodable response");
            TransportError::Decode(err.to_string())
        })
    }
}

impl TransportError {
    /// Localized text for the blocking notification.
    pub fn notice(&self) -> String {
        match self {
            TransportError::Network(_) => crate::t!("alert-network-error"),
            TransportError::Status { code, status_text } => {
                let status = if status_text.is_empty() {
                    code.to_string()
                } else {
                    status_text.clone()
                };
                crate::t!("alert-request-failed", status = status)
            }
            TransportError::Decode(reason) => {
                crate::t!("alert-bad-response", reason = reason.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeHttp, RecordingDialogs};
    use futures::executor::block_on;
    use serde_json::json;

    fn transport(http: &Rc<FakeHttp>) -> Transport {
        Transport::new(http.clone(), "http://console.local")
    }

    #[test]
    fn read_params_go_to_query_string() {
        let encoded = ApiRequest::get("/energy/api/report/peak_valley")
            .param("factory_id", "F01")
            .param("date", "2024-03-05")
            .param("energy_type", "电")
            .encode("http://console.local/");

        assert_eq!(encoded.method, Method::Get);
        assert!(encoded.body.is_none());
        assert!(encoded.content_type.is_none());
        assert_eq!(
            encoded.url,
            "http://console.local/energy/api/report/peak_valley?factory_id=F01&date=2024-03-05&energy_type=%E7%94%B5"
        );
    }

    #[test]
    fn read_without_params_has_no_question_mark() {
        let encoded = ApiRequest::get("/energy/api/factory/list").encode("");
        assert_eq!(encoded.url, "/energy/api/factory/list");
    }

    #[test]
    fn write_params_go_to_form_body() {
        let encoded = ApiRequest::post("/energy/api/meter/delete")
            .param("meter_id", "M 01&x")
            .encode("http://console.local");

        assert_eq!(encoded.url, "http://console.local/energy/api/meter/delete");
        assert!(!encoded.url.contains('?'));
        assert_eq!(encoded.body.as_deref(), Some("meter_id=M+01%26x"));
        assert_eq!(encoded.content_type, Some(FORM_CONTENT_TYPE));
    }

    #[test]
    fn write_without_params_sends_empty_body() {
        let encoded = ApiRequest::post("/energy/api/monitor/collect").encode("");
        assert_eq!(encoded.body.as_deref(), Some(""));
    }

    #[test]
    fn success_parses_body_without_notifying() {
        let http = FakeHttp::new();
        http.respond_json(200, json!({ "success": true, "data": { "n": 1 } }));
        let dialogs = RecordingDialogs::new();

        let value = block_on(transport(&http).send(&ApiRequest::get("/x"), &*dialogs)).unwrap();

        assert_eq!(value["data"]["n"], 1);
        assert!(dialogs.alerts().is_empty());
        assert_eq!(http.requests().len(), 1);
    }

    #[test]
    fn non_2xx_reports_status_code_and_notifies_once() {
        let http = FakeHttp::new();
        http.respond(500, "Internal Server Error", "boom");
        let dialogs = RecordingDialogs::new();

        let err = block_on(transport(&http).send(&ApiRequest::post("/x"), &*dialogs)).unwrap_err();

        assert!(matches!(err, TransportError::Status { code: 500, .. }));
        assert!(err.to_string().contains("500"));
        let alerts = dialogs.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("Internal Server Error"));
    }

    #[test]
    fn unreachable_backend_is_a_network_error() {
        let http = FakeHttp::new();
        http.fail("connection refused");
        let dialogs = RecordingDialogs::new();

        let err = block_on(transport(&http).send(&ApiRequest::get("/x"), &*dialogs)).unwrap_err();

        assert!(matches!(err, TransportError::Network(_)));
        assert!(err.to_string().starts_with("network error"));
        assert_eq!(dialogs.alerts().len(), 1);
    }

    #[test]
    fn quiet_fetch_returns_the_error_without_notifying() {
        let http = FakeHttp::new();
        http.respond(404, "Not Found", "");
        http.fail("connection refused");

        let err = block_on(transport(&http).fetch(&ApiRequest::get("/x"))).unwrap_err();
        assert!(matches!(err, TransportError::Status { code: 404, .. }));
        assert!(err.notice().contains("Not Found"));

        let err = block_on(transport(&http).fetch(&ApiRequest::get("/x"))).unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
        assert_eq!(http.requests().len(), 2);
    }

    #[test]
    fn status_without_reason_phrase_is_notified_by_code() {
        let http = FakeHttp::new();
        http.respond(599, "", "");
        let dialogs = RecordingDialogs::new();

        let _ = block_on(transport(&http).send(&ApiRequest::get("/x"), &*dialogs));

        assert!(dialogs.alerts()[0].contains("599"));
    }

    #[test]
    fn garbage_body_is_a_single_decode_failure() {
        let http = FakeHttp::new();
        http.respond(200, "OK", "<html>");
        let dialogs = RecordingDialogs::new();

        let err = block_on(transport(&http).send(&ApiRequest::get("/x"), &*dialogs)).unwrap_err();

        assert!(matches!(err, TransportError::Decode(_)));
        assert_eq!(dialogs.alerts().len(), 1);
    }
}
