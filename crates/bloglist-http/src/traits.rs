use crate::error::Result;
use crate::types::{ApiRequest, ApiResponse};
use async_trait::async_trait;

/// Abstraction for network operations.
///
/// `url` is absolute; the client joins it from the configured base URL.
#[async_trait]
pub trait ApiNetwork: Send + Sync + 'static {
    async fn fetch(&self, url: &str, req: ApiRequest) -> Result<ApiResponse>;
}
