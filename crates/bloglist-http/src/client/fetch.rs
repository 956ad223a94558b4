//! Main bloglist HTTP client implementation.

use crate::client::config::ClientConfig;
use crate::client::native_network::NativeNetwork;
use crate::error::{ClientError, Result};
use crate::traits::ApiNetwork;
use crate::types::{ApiRequest, ApiResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shared transport for the services. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    pub network: Arc<dyn ApiNetwork>,
    pub config: Arc<ClientConfig>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("{}: {}", config.base_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(ApiClient {
            network: Arc::new(NativeNetwork::new(client)),
            config: Arc::new(config),
        })
    }

    /// Use a custom transport, e.g. a recording fake in tests.
    pub fn with_network(config: ClientConfig, network: Arc<dyn ApiNetwork>) -> Self {
        ApiClient {
            network,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Send a request and return the raw response, whatever its status.
    pub async fn fetch(&self, path: &str, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url(path);
        self.network.fetch(&url, request).await
    }

    /// Send a request, fail on non-2xx, decode the JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: ApiRequest,
    ) -> Result<T> {
        let method = request.method.clone();
        let response = self.fetch(path, request).await?.error_for_status();
        match response {
            Ok(response) => response.json(),
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method, path, e);
                Err(e)
            }
        }
    }

    /// Send a request and only check its status.
    pub async fn fetch_empty(&self, path: &str, request: ApiRequest) -> Result<()> {
        let method = request.method.clone();
        if let Err(e) = self.fetch(path, request).await?.error_for_status() {
            tracing::warn!("{} {} failed: {}", method, path, e);
            return Err(e);
        }
        Ok(())
    }
}
