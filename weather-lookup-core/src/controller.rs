use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use tracing::debug;

use crate::{
    backend::WeatherBackend,
    error::EMPTY_CITY_MESSAGE,
    model::{Query, WeatherReport},
    view::WeatherView,
};

/// The four mutually exclusive UI states of a lookup.
///
/// Error and Result are terminal only until the next submission; nothing
/// returns to Idle on its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Result(WeatherReport),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns the request lifecycle: validates input, issues one backend request
/// per submission, and drives the view through Loading into Error or Result.
///
/// Overlapping submissions are resolved by a monotonically increasing
/// request token: a completion whose token is no longer the latest is
/// discarded without touching the view or the state.
pub struct LookupController<B, V> {
    backend: B,
    view: V,
    latest_token: AtomicU64,
    state: Mutex<UiState>,
}

impl<B: WeatherBackend, V: WeatherView> LookupController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            latest_token: AtomicU64::new(0),
            state: Mutex::new(UiState::Idle),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> UiState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run one submission to completion.
    ///
    /// Empty input (after trimming) short-circuits to a validation error and
    /// never reaches the network.
    pub async fn submit(&self, raw: &str) {
        let Some(query) = Query::parse(raw) else {
            self.fail(EMPTY_CITY_MESSAGE.to_owned());
            return;
        };

        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;

        self.view.set_city(query.city());
        self.view.set_error(None);
        self.view.set_report(None);
        self.view.set_loading(true);
        self.set_state(UiState::Loading);

        let outcome = self.backend.current_weather(query.city()).await;

        if self.latest_token.load(Ordering::SeqCst) != token {
            debug!(city = query.city(), token, "discarding superseded response");
            return;
        }

        match outcome {
            Ok(report) => {
                self.view.set_loading(false);
                self.view.set_report(Some(&report));
                self.set_state(UiState::Result(report));
            }
            Err(err) => {
                debug!(city = query.city(), detail = err.detail(), "lookup failed");
                self.fail(err.user_message().to_owned());
            }
        }
    }

    // Loading is cleared before the error region is touched.
    fn fail(&self, message: String) {
        self.view.set_loading(false);
        self.view.set_error(Some(&message));
        self.set_state(UiState::Error(message));
    }

    fn set_state(&self, next: UiState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
