//! Logged-in user persisted across restarts.

use crate::local_storage::KeyValueStorage;
use anyhow::Result;
use bloglist_http::LoggedUser;
use std::sync::Arc;
use tracing::{info, warn};

/// Storage key holding the serialized `{username, name, token}` object.
pub const LOGGED_USER_KEY: &str = "loggedUser";

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// The persisted user, if any. Unparseable values count as logged out.
    pub fn load(&self) -> Option<LoggedUser> {
        let json = self.storage.get_item(LOGGED_USER_KEY)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding unreadable session: {}", e);
                None
            }
        }
    }

    pub fn save(&self, user: &LoggedUser) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(LOGGED_USER_KEY, &json)?;
        info!("[Session] saved session for {}", user.username);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(LOGGED_USER_KEY)
    }
}
