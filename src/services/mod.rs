pub mod api_client;
pub mod cache_service;
pub mod error;
pub mod session;

pub use api_client::{fetch_discovery, fetch_post, ApiClient};
pub use cache_service::BrowserCache;
pub use error::ApiError;
