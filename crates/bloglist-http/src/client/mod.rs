//! Bloglist HTTP client implementation.

mod config;
mod fetch;
pub mod native_network;

pub use config::ClientConfig;
pub use fetch::ApiClient;
pub use native_network::NativeNetwork;
