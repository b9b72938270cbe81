use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    error::{FetchError, FetchErrorKind},
    model::WeatherReport,
};

use super::WeatherBackend;

/// Client for the weather backend's `/api/weather` endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherBackend for HttpBackend {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/api/weather", self.base_url);

        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("city", city)])
            .send()
            .await
            .map_err(|e| {
                // No response at all: the transport layer kinds this itself
                // instead of round-tripping through text classification.
                FetchError::new(
                    FetchErrorKind::NetworkUnreachable,
                    format!("Failed to fetch: {e}"),
                )
            })?;

        let status = res.status();
        debug!(%status, "backend responded");

        let body = res.text().await.map_err(|e| {
            FetchError::new(
                FetchErrorKind::NetworkUnreachable,
                format!("Failed to read response body: {e}"),
            )
        })?;

        if !status.is_success() {
            let detail = if body.trim().is_empty() {
                format!("HTTP error! status: {}", status.as_u16())
            } else {
                body
            };
            return Err(FetchError::new(
                FetchErrorKind::from_text(&detail),
                truncate_body(&detail),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            FetchError::new(
                FetchErrorKind::Unknown,
                format!("Failed to parse weather JSON: {e}"),
            )
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_owned()
    }
}
