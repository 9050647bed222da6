//! Text rendering of the widget card.

use widget_core::{ResultView, WidgetState};

pub const TITLE: &str = "Weather Widget";
pub const SUBTITLE: &str = "Search for the current weather conditions in your City.";
pub const PLACEHOLDER: &str = "Enter a city name";
pub const LOADING: &str = "Loading...";

const THERMOMETER: &str = "🌡";
const CLOUD: &str = "☁";
const MAP_PIN: &str = "📍";

pub fn header() -> String {
    format!("{TITLE}\n{SUBTITLE}")
}

/// Marker printed while a search for `input` runs; blank input never searches.
pub fn loading_marker(input: &str) -> Option<&'static str> {
    (!input.trim().is_empty()).then_some(LOADING)
}

/// Body of the card below the form: loading marker, error line, or result block.
pub fn body(state: &WidgetState, view: Option<&ResultView>) -> String {
    if state.loading {
        return LOADING.to_string();
    }
    if let Some(error) = &state.error {
        return format!("✖ {error}");
    }

    match view {
        Some(view) => [
            format!("{THERMOMETER}  {}", view.temperature),
            format!("{CLOUD}  {}", view.condition),
            format!("{MAP_PIN}  {}", view.location),
        ]
        .join("\n"),
        None => String::new(),
    }
}
