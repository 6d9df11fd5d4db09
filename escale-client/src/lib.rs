pub mod app_config;
pub mod http;

pub use app_config::Config;
pub use http::HttpFlightApi;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}
