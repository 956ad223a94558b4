pub mod blogs;
pub mod commands;
pub mod config_store;
pub mod error;
pub mod local_storage;
pub mod models;
pub mod notification;
pub mod session;

pub use blogs::{sort_blogs_by_likes, BlogList};
pub use commands::BlogApp;
pub use error::AppError;
pub use local_storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use models::AppView;
pub use notification::{Notification, NotificationStore};
pub use session::SessionStore;

pub use bloglist_http::{Blog, BlogOwner, Credentials, LoggedUser, NewBlog};
