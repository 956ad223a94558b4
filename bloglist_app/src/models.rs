use bloglist_http::{Blog, LoggedUser};
use serde::{Deserialize, Serialize};

/// Public part of the logged-in user. The token never leaves the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewUser {
    pub username: String,
    pub name: String,
}

impl From<&LoggedUser> for ViewUser {
    fn from(user: &LoggedUser) -> Self {
        Self {
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

/// Snapshot of what the user currently sees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppView {
    pub user: Option<ViewUser>,
    /// Empty while logged out.
    pub blogs: Vec<Blog>,
    pub notification: Option<String>,
    pub new_blog_form_visible: bool,
}

impl AppView {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
