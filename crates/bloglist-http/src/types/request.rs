//! Outgoing request parameters.

use crate::error::{ClientError, Result};
use serde::Serialize;

/// Outgoing request parameters.
#[derive(Clone, Debug, Default)]
pub struct ApiRequest {
    pub method: String,
    pub content_type: Option<String>,
    pub body: bytes::Bytes,
    pub extra_headers: std::collections::BTreeMap<String, String>,
}

impl ApiRequest {
    #[inline]
    pub fn new() -> Self {
        Self {
            method: "GET".to_string(),
            body: bytes::Bytes::new(),
            extra_headers: std::collections::BTreeMap::new(),
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<bytes::Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Serialize `value` as the JSON body.
    pub fn with_json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(|e| ClientError::Encode(e.to_string()))?;
        Ok(self
            .with_content_type("application/json")
            .with_body(body))
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Attach an `Authorization` header when a value is present.
    pub fn with_authorization(self, authorization: Option<&str>) -> Self {
        match authorization {
            Some(value) => self.with_header("Authorization", value),
            None => self,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.extra_headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
