//! Wire types for the bloglist API.

mod blog;
mod request;
mod response;
mod user;

pub use blog::{Blog, BlogOwner, BlogUpdate, BlogUser, NewBlog};
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use user::{Credentials, LoggedUser};
