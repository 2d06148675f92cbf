//! Request Gateway
//!
//! All traffic to the todo API goes through [`ApiClient`]: it joins paths onto
//! the base URL, attaches the bearer header while a session is active and
//! keeps the loading indicator raised while requests are outstanding.
//! Endpoint wrappers live in the submodules, organized by resource.

mod http;
mod loading;
mod todo;
mod user;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub use http::HttpTransport;
pub use loading::LoadingTracker;
pub use todo::*;
pub use user::*;

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(self) -> ApiResult<T> {
        serde_json::from_value(self.data).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Black-box request/response function underneath the gateway
#[async_trait(?Send)]
pub trait Transport {
    /// Send one request. Any response the server produced is `Ok`,
    /// whatever its status; `Err` means nothing came back.
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        (**self).send(request).await
    }
}

// ========================
// Gateway
// ========================

pub struct ApiClient {
    base_url: String,
    transport: Box<dyn Transport>,
    authorization: RefCell<Option<String>>,
    loading: LoadingTracker,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            authorization: RefCell::new(None),
            loading: LoadingTracker::new(),
        }
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    /// Attach `Authorization: Bearer {token}` to every following request
    pub fn set_bearer_token(&self, token: &str) {
        *self.authorization.borrow_mut() = Some(format!("Bearer {}", token));
    }

    /// Stop sending the authorization header altogether
    pub fn clear_authorization(&self) {
        self.authorization.borrow_mut().take();
    }

    pub fn authorization(&self) -> Option<String> {
        self.authorization.borrow().clone()
    }

    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        let body = encode(body)?;
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        let body = encode(body)?;
        self.request(Method::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.request(Method::Delete, path, None).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<ApiResponse> {
        let mut headers = Vec::new();
        if let Some(value) = self.authorization() {
            headers.push(("Authorization".to_string(), value));
        }
        let request = ApiRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };

        log::debug!("[API] {} {}", method, request.url);
        let _in_flight = self.loading.begin();
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("[API] {} {} failed: {}", method, path, e);
            e
        })?;

        if !response.is_success() {
            log::warn!("[API] {} {} -> {}", method, path, response.status);
            return Err(ApiError::Http { status: response.status });
        }
        Ok(response)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}
