use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ApiRequest, Credentials, LoggedUser};
use tracing::info;

const LOGIN_PATH: &str = "/api/login";

#[derive(Clone)]
pub struct LoginService {
    client: ApiClient,
}

impl LoginService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/login`. Wrong credentials surface as a 401 status error.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoggedUser> {
        let req = ApiRequest::new()
            .with_method("POST")
            .with_json(credentials)?;

        let user: LoggedUser = self.client.fetch_json(LOGIN_PATH, req).await?;
        info!("[Login] authenticated as {}", user.username);
        Ok(user)
    }
}
