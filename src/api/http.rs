//! Browser Transport
//!
//! `fetch`-backed implementation of [`Transport`] via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let outgoing = match &request.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = outgoing
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            data: parse_body(text),
        })
    }
}

/// Empty bodies become `null`; non-JSON bodies are kept verbatim as a string
fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
