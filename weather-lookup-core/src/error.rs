use thiserror::Error;

/// Shown when the user submits an empty city. Handled entirely client-side.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// What went wrong with a lookup, as reported by the backend or the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Backend could not resolve the city.
    NotFound,
    /// Backend rejected its upstream API key.
    Unauthorized,
    /// Backend is running without an API key at all.
    Misconfigured,
    /// Request never produced a response.
    NetworkUnreachable,
    Unknown,
}

impl FetchErrorKind {
    /// Compatibility fallback: infer the kind from free-form backend text.
    ///
    /// The backend reports errors as plain text, so this matches the
    /// substrings it is known to emit. Transport-level failures are kinded
    /// directly by the HTTP layer and never go through here.
    pub fn from_text(text: &str) -> Self {
        if text.contains("404") {
            FetchErrorKind::NotFound
        } else if text.contains("401") {
            FetchErrorKind::Unauthorized
        } else if text.contains("API key not configured") {
            FetchErrorKind::Misconfigured
        } else if text.contains("Failed to fetch") || text.contains("Network") {
            FetchErrorKind::NetworkUnreachable
        } else {
            FetchErrorKind::Unknown
        }
    }
}

/// A failed lookup: structured kind plus the raw detail it was derived from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{detail}")]
pub struct FetchError {
    kind: FetchErrorKind,
    detail: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Build an error by classifying free-form backend text.
    pub fn classify(text: &str) -> Self {
        Self::new(FetchErrorKind::from_text(text), text)
    }

    pub fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The fixed user-facing message for this kind of failure.
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::NotFound => {
                "City not found. Please check the city name and try again."
            }
            FetchErrorKind::Unauthorized => "API key error. Please check the server configuration.",
            FetchErrorKind::Misconfigured => {
                "Server configuration error. API key is missing."
            }
            FetchErrorKind::NetworkUnreachable => {
                "Network error. Please check your internet connection and try again."
            }
            FetchErrorKind::Unknown => "Unable to fetch weather data. Please try again later.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_backend_text() {
        let cases = [
            ("HTTP error! status: 404", FetchErrorKind::NotFound),
            ("API returned status code: 404", FetchErrorKind::NotFound),
            ("HTTP error! status: 401", FetchErrorKind::Unauthorized),
            (
                "OpenWeather API key not configured",
                FetchErrorKind::Misconfigured,
            ),
            (
                "Failed to fetch: connection refused",
                FetchErrorKind::NetworkUnreachable,
            ),
            ("Network is unreachable", FetchErrorKind::NetworkUnreachable),
            ("something else entirely", FetchErrorKind::Unknown),
        ];

        for (text, expected) in cases {
            assert_eq!(FetchErrorKind::from_text(text), expected, "text: {text}");
        }
    }

    #[test]
    fn status_substring_wins_over_later_rules() {
        // "404" is checked before the network-text rule.
        let err = FetchError::classify("Network error while handling 404");
        assert_eq!(err.kind(), FetchErrorKind::NotFound);
    }

    #[test]
    fn user_messages_are_fixed_strings() {
        let err = FetchError::classify("backend said 404, sorry");
        assert_eq!(
            err.user_message(),
            "City not found. Please check the city name and try again."
        );

        let err = FetchError::new(FetchErrorKind::NetworkUnreachable, "Failed to fetch");
        assert_eq!(
            err.user_message(),
            "Network error. Please check your internet connection and try again."
        );

        let err = FetchError::classify("HTTP error! status: 500");
        assert_eq!(
            err.user_message(),
            "Unable to fetch weather data. Please try again later."
        );
    }

    #[test]
    fn detail_keeps_original_text() {
        let err = FetchError::classify("HTTP error! status: 404");
        assert_eq!(err.detail(), "HTTP error! status: 404");
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
