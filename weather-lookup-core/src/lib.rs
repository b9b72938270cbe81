//! Core library for the weather lookup client.
//!
//! This crate defines:
//! - Configuration for reaching the backend
//! - The backend client and its trait seam
//! - The lookup controller, its UI states, and the view binding
//! - Shared domain models (queries, reports)
//!
//! It is used by `weather-lookup-cli`, but can also be reused by other binaries or services.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use backend::{HttpBackend, WeatherBackend, backend_from_config};
pub use config::{Config, DEFAULT_BACKEND_URL};
pub use controller::{LookupController, UiState};
pub use error::{EMPTY_CITY_MESSAGE, FetchError, FetchErrorKind};
pub use model::{Query, WeatherReport};
pub use view::WeatherView;
