//! `/api/blogs` endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ApiRequest, Blog, BlogUpdate, NewBlog};
use tracing::debug;

const BASE_PATH: &str = "/api/blogs";

/// Blog endpoints. Holds the bearer token attached to mutating calls.
#[derive(Clone)]
pub struct BlogService {
    client: ApiClient,
    authorization: Option<String>,
}

impl BlogService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            authorization: None,
        }
    }

    pub fn set_token(&mut self, token: &str) {
        self.authorization = Some(format!("Bearer {}", token));
    }

    pub fn clear_token(&mut self) {
        self.authorization = None;
    }

    fn authed(&self, method: &str) -> ApiRequest {
        ApiRequest::new()
            .with_method(method)
            .with_authorization(self.authorization.as_deref())
    }

    fn blog_path(id: &str) -> String {
        format!("{}/{}", BASE_PATH, id)
    }

    pub async fn get_all(&self) -> Result<Vec<Blog>> {
        let blogs: Vec<Blog> = self.client.fetch_json(BASE_PATH, ApiRequest::new()).await?;
        debug!("[Blogs] fetched {} blogs", blogs.len());
        Ok(blogs)
    }

    pub async fn create(&self, blog: &NewBlog) -> Result<Blog> {
        let req = self.authed("POST").with_json(blog)?;
        self.client.fetch_json(BASE_PATH, req).await
    }

    pub async fn update(&self, id: &str, blog: &BlogUpdate) -> Result<Blog> {
        let req = self.authed("PUT").with_json(blog)?;
        self.client.fetch_json(&Self::blog_path(id), req).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let req = self.authed("DELETE");
        self.client.fetch_empty(&Self::blog_path(id), req).await
    }
}
