//! REST client for the bloglist API.
//!
//! [`ApiClient`] owns the transport; [`BlogService`] and [`LoginService`]
//! speak the `/api/blogs` and `/api/login` endpoints on top of it.

pub mod client;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

pub use client::{ApiClient, ClientConfig};
pub use error::{ClientError, Result};
pub use services::{BlogService, LoginService};
pub use traits::ApiNetwork;
pub use types::{
    ApiRequest, ApiResponse, Blog, BlogOwner, BlogUpdate, BlogUser, Credentials, LoggedUser,
    NewBlog,
};
