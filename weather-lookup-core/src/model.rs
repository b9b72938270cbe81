use serde::{Deserialize, Serialize};

/// A validated lookup query: a non-empty, trimmed city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    city: String,
}

impl Query {
    /// Trim raw user input; empty after trimming is not a query.
    pub fn parse(raw: &str) -> Option<Self> {
        let city = raw.trim();
        if city.is_empty() {
            None
        } else {
            Some(Self {
                city: city.to_owned(),
            })
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current weather for one city, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: f64,
    pub cloud_cover: u8,
    #[serde(default)]
    pub icon: Option<String>,
}

impl WeatherReport {
    /// Temperature rounded to the nearest integer, for display.
    pub fn temperature_display(&self) -> String {
        format!("{}", self.temperature.round() as i64)
    }

    /// Feels-like temperature rounded to the nearest integer, for display.
    pub fn feels_like_display(&self) -> String {
        format!("{}", self.feels_like.round() as i64)
    }

    /// Wind speed with exactly one decimal digit, for display.
    pub fn wind_speed_display(&self) -> String {
        format!("{:.1}", self.wind_speed)
    }

    /// Icon URL on the OpenWeather CDN, if the report carries an icon code.
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_deref()
            .map(|icon| format!("https://openweathermap.org/img/wn/{icon}@2x.png"))
    }
}
