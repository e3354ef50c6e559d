// ABOUTME: In-process HTTP client for driving the prediction routers in tests
// ABOUTME: Builds a request, runs it through tower oneshot, and decodes the JSON reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stunting Predictor Contributors

use axum::{
    body::{to_bytes, Body},
    http::{header, request, Method, Request},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceExt;

/// Request under construction
pub struct AxumTestRequest {
    builder: request::Builder,
    body: Body,
}

impl AxumTestRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Body::empty(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    /// Serialize `payload` as the JSON body
    pub fn json<T: Serialize>(self, payload: &T) -> Self {
        self.raw_body(&serde_json::to_string(payload).unwrap(), "application/json")
    }

    /// Send `body` verbatim, e.g. truncated JSON
    pub fn raw_body(mut self, body: &str, content_type: &str) -> Self {
        self.builder = self.builder.header(header::CONTENT_TYPE, content_type);
        self.body = Body::from(body.to_owned());
        self
    }

    pub async fn send(self, app: Router) -> AxumTestResponse {
        let request = self.builder.body(self.body).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status().as_u16();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        AxumTestResponse {
            status,
            body: body.to_vec(),
        }
    }
}

/// Status and buffered body of a routed request
pub struct AxumTestResponse {
    status: u16,
    body: Vec<u8>,
}

impl AxumTestResponse {
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Decode the body; panics with the raw text if it is not the expected JSON
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not valid JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }
}
