use crate::{Config, WeatherReport, error::FetchError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

pub use http::HttpBackend;

/// Abstraction over the weather backend, so the controller can be driven
/// against a test double as well as the real HTTP endpoint.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, FetchError>;
}

/// Construct the HTTP backend from config.
pub fn backend_from_config(config: &Config) -> HttpBackend {
    HttpBackend::new(config.backend_url())
}
