//! Blog entries and the payloads that create or update them.

use serde::{Deserialize, Serialize};

/// A blog entry as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blog {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub url: String,
    /// Absent until the blog has been liked at least once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<BlogOwner>,
}

/// Owner reference. List responses populate it; create and update responses
/// usually carry the bare user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BlogOwner {
    User(BlogUser),
    Id(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
}

impl BlogOwner {
    pub fn id(&self) -> &str {
        match self {
            BlogOwner::User(user) => &user.id,
            BlogOwner::Id(id) => id,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            BlogOwner::User(user) => Some(&user.username),
            BlogOwner::Id(_) => None,
        }
    }
}

impl Blog {
    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(BlogOwner::id)
    }

    pub fn owner_username(&self) -> Option<&str> {
        self.user.as_ref().and_then(BlogOwner::username)
    }

    /// PUT body that records one more like. A blog without likes becomes 1.
    pub fn liked(&self) -> BlogUpdate {
        BlogUpdate {
            user: self.owner_id().map(str::to_string),
            likes: self.likes.unwrap_or(0).saturating_add(1),
            author: self.author.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
        }
    }
}

/// Body of `POST /api/blogs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl NewBlog {
    pub fn new(title: impl Into<String>, author: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
        }
    }
}

/// Body of `PUT /api/blogs/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub likes: i64,
    pub author: String,
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_owner() {
        let blog: Blog = serde_json::from_str(
            r#"{"id":"b1","title":"T","author":"A","url":"U","likes":3,
                "user":{"id":"u1","username":"root","name":"Superuser"}}"#,
        )
        .unwrap();

        assert_eq!(blog.likes, Some(3));
        assert_eq!(blog.owner_id(), Some("u1"));
        assert_eq!(blog.owner_username(), Some("root"));
    }

    #[test]
    fn test_bare_owner_id_and_missing_likes() {
        let blog: Blog =
            serde_json::from_str(r#"{"id":"b2","title":"T","author":"A","url":"U","user":"u9"}"#)
                .unwrap();

        assert_eq!(blog.likes, None);
        assert_eq!(blog.owner_id(), Some("u9"));
        assert_eq!(blog.owner_username(), None);
    }

    #[test]
    fn test_liked_increments_by_one() {
        let mut blog: Blog =
            serde_json::from_str(r#"{"id":"b3","title":"T","author":"A","url":"U","user":"u1"}"#)
                .unwrap();

        let update = blog.liked();
        assert_eq!(update.likes, 1);
        assert_eq!(update.user.as_deref(), Some("u1"));

        blog.likes = Some(41);
        assert_eq!(blog.liked().likes, 42);

        blog.likes = Some(i64::MAX);
        assert_eq!(blog.liked().likes, i64::MAX);
    }

    #[test]
    fn test_update_serializes_owner_as_id() {
        let update = BlogUpdate {
            user: Some("u1".into()),
            likes: 5,
            author: "A".into(),
            title: "T".into(),
            url: "U".into(),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["user"], "u1");
        assert_eq!(value["likes"], 5);
    }
}
