//! Core library for the `weather-widget` tool.
//!
//! This crate defines:
//! - Configuration of the weather API key and endpoint
//! - The weatherapi.com fetch client behind the `WeatherProvider` seam
//! - Pure message formatters for temperature, conditions and time of day
//! - The widget form state and its submit pipeline
//!
//! It is used by `weather-widget`, but can be driven by any front end that can
//! render three lines of text.

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod widget;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{FetchError, WidgetError};
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, provider_from_config};
pub use widget::{ResultView, Submission, Widget, WidgetState};
