//! Failures surfaced to the user.
//!
//! The `Display` text of each variant is the notification shown for it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Wrong credentials")]
    Login(#[source] bloglist_http::ClientError),

    #[error("Cannot load blogs")]
    Load(#[source] bloglist_http::ClientError),

    #[error("Cannot add new blog")]
    Create(#[source] Option<bloglist_http::ClientError>),

    #[error("Cannot like")]
    Like(#[source] Option<bloglist_http::ClientError>),

    #[error("Cannot delete")]
    Delete(#[source] Option<bloglist_http::ClientError>),
}

pub type Result<T> = core::result::Result<T, AppError>;
