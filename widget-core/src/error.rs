use reqwest::StatusCode;
use thiserror::Error;

/// Message shown when the form is submitted without a location.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a location";

/// Failure of a single call to the weather provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with a non-success status.
    #[error("City not found! (status {status}: {body})")]
    CityNotFound { status: StatusCode, body: String },

    /// The request never produced a response.
    #[error("Failed to send request to weather provider")]
    Network(#[source] reqwest::Error),

    /// The response body could not be read or did not have the expected shape.
    #[error("Failed to parse weather provider response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Text displayed to the user in place of the result block.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::CityNotFound { .. } => "City not found!",
            FetchError::Network(_) | FetchError::Parse(_) => {
                "Could not fetch weather data. Please try again."
            }
        }
    }
}

/// Every way a form submission can end without a snapshot.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Please enter a location")]
    EmptyInput,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A newer submission started before this one settled; its result was dropped.
    #[error("Response for request #{token} discarded: a newer search is in flight")]
    Superseded { token: u64 },
}

impl WidgetError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WidgetError::EmptyInput => EMPTY_INPUT_MESSAGE,
            WidgetError::Fetch(err) => err.user_message(),
            WidgetError::Superseded { .. } => "A newer search is in progress.",
        }
    }
}
