//! Form state of the widget and the submit pipeline:
//! validate, set loading, fetch, store snapshot or error, clear loading.

use crate::{
    clock::Clock,
    error::{FetchError, WidgetError},
    format::{location_message_now, temperature_message, weather_message},
    model::WeatherSnapshot,
    provider::WeatherProvider,
};

/// Everything the presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub input: String,
    pub snapshot: Option<WeatherSnapshot>,
    pub error: Option<String>,
    pub loading: bool,
}

/// A submission that passed validation and is waiting for the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub token: u64,
    pub location: String,
}

/// The three lines of the result block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub temperature: String,
    pub condition: String,
    pub location: String,
}

impl ResultView {
    pub fn from_snapshot(snapshot: &WeatherSnapshot, clock: &dyn Clock) -> Self {
        Self {
            temperature: temperature_message(snapshot.temperature, &snapshot.unit),
            condition: weather_message(&snapshot.description),
            location: location_message_now(&snapshot.location, clock),
        }
    }
}

#[derive(Debug)]
pub struct Widget<P> {
    provider: P,
    state: WidgetState,
    latest_token: u64,
}

impl<P: WeatherProvider> Widget<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, state: WidgetState::default(), latest_token: 0 }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state.input = input.into();
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.state.snapshot.as_ref()
    }

    /// Formatted result block for the current snapshot, if any.
    pub fn view(&self, clock: &dyn Clock) -> Option<ResultView> {
        self.snapshot().map(|s| ResultView::from_snapshot(s, clock))
    }

    /// Validate the input and, if it is usable, mark a request as in flight.
    ///
    /// Returns `None` for blank input, after setting the validation error and
    /// clearing any previous snapshot. Either way, searches already in flight
    /// become stale.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        self.latest_token += 1;

        let location = self.state.input.trim().to_string();
        if location.is_empty() {
            self.state.error = Some(WidgetError::EmptyInput.user_message().to_string());
            self.state.snapshot = None;
            self.state.loading = false;
            return None;
        }

        self.state.loading = true;
        self.state.error = None;

        Some(Submission { token: self.latest_token, location })
    }

    /// Apply the provider's answer for `submission`.
    ///
    /// Results for anything but the latest submission leave the state untouched.
    pub fn complete(
        &mut self,
        submission: Submission,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> Result<(), WidgetError> {
        if submission.token != self.latest_token {
            tracing::warn!(
                token = submission.token,
                latest = self.latest_token,
                location = %submission.location,
                "discarding stale weather response"
            );
            return Err(WidgetError::Superseded { token: submission.token });
        }

        self.state.loading = false;

        match result {
            Ok(snapshot) => {
                tracing::debug!(location = %snapshot.location, "weather snapshot updated");
                self.state.snapshot = Some(snapshot);
                Ok(())
            }
            Err(err) => {
                tracing::error!(location = %submission.location, error = %err, "Error fetching weather data");
                self.state.snapshot = None;
                self.state.error = Some(err.user_message().to_string());
                Err(err.into())
            }
        }
    }

    /// Run one full submission with the current input.
    pub async fn submit(&mut self) -> Result<(), WidgetError> {
        let submission = self.begin_submit().ok_or(WidgetError::EmptyInput)?;
        let result = self.provider.current(&submission.location).await;
        self.complete(submission, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct StubProvider {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl StubProvider {
        fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("lock poisoned").clone()
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
            self.calls.lock().expect("lock poisoned").push(location.to_string());
            if self.fail {
                return Err(FetchError::CityNotFound {
                    status: StatusCode::BAD_REQUEST,
                    body: "No matching location found.".into(),
                });
            }
            Ok(snapshot(location, 22.0))
        }
    }

    fn snapshot(location: &str, temperature: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature,
            humidity: 50.0,
            wind: 10.0,
            description: "Sunny".into(),
            location: location.into(),
            unit: "C".into(),
        }
    }

    #[test]
    fn loading_is_set_on_begin_and_cleared_on_complete() {
        let mut widget = Widget::new(StubProvider::default());
        widget.set_input("Paris");

        let submission = widget.begin_submit().expect("valid input");
        assert!(widget.is_loading());
        assert_eq!(submission.location, "Paris");

        widget.complete(submission, Ok(snapshot("Paris", 22.0))).expect("applied");
        assert!(!widget.is_loading());
        assert_eq!(widget.snapshot().map(|s| s.location.as_str()), Some("Paris"));
    }

    #[test]
    fn loading_is_cleared_after_failure() {
        let mut widget = Widget::new(StubProvider::default());
        widget.set_input("Paris");

        let submission = widget.begin_submit().expect("valid input");
        let err = widget
            .complete(submission, Err(FetchError::Parse("bad body".into())))
            .unwrap_err();

        assert!(matches!(err, WidgetError::Fetch(FetchError::Parse(_))));
        assert!(!widget.is_loading());
        assert!(widget.snapshot().is_none());
    }

    #[tokio::test]
    async fn blank_input_never_calls_provider() {
        let mut widget = Widget::new(StubProvider::default());
        widget.set_input("Paris");
        widget.submit().await.expect("first search succeeds");
        assert!(widget.snapshot().is_some());

        for blank in ["", "   ", "\t\n"] {
            widget.set_input(blank);
            let err = widget.submit().await.unwrap_err();

            assert!(matches!(err, WidgetError::EmptyInput));
            assert_eq!(widget.error(), Some("Please enter a location"));
            assert!(widget.snapshot().is_none());
            assert!(!widget.is_loading());
        }

        assert_eq!(widget.provider.calls(), vec!["Paris".to_string()]);
    }

    #[tokio::test]
    async fn submit_sends_trimmed_location_and_clears_previous_error() {
        let mut widget = Widget::new(StubProvider::default());
        widget.set_input("");
        assert!(widget.submit().await.is_err());
        assert!(widget.error().is_some());

        widget.set_input("  Lagos  ");
        widget.submit().await.expect("success");

        assert_eq!(widget.provider.calls(), vec!["Lagos".to_string()]);
        assert_eq!(widget.error(), None);
        assert_eq!(widget.input(), "  Lagos  ");
        assert_eq!(widget.snapshot(), Some(&snapshot("Lagos", 22.0)));
    }

    #[tokio::test]
    async fn failed_fetch_clears_snapshot_and_surfaces_message() {
        let mut widget = Widget::new(StubProvider::failing());
        widget.state.snapshot = Some(snapshot("Paris", 22.0));
        widget.set_input("Atlantis");

        let err = widget.submit().await.unwrap_err();

        assert!(matches!(err, WidgetError::Fetch(FetchError::CityNotFound { .. })));
        assert!(widget.snapshot().is_none());
        assert!(!widget.is_loading());
        assert_eq!(widget.error(), Some("City not found!"));
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_result() {
        let mut widget = Widget::new(StubProvider::default());

        widget.set_input("Paris");
        let first = widget.begin_submit().expect("valid input");
        widget.set_input("London");
        let second = widget.begin_submit().expect("valid input");

        let err = widget.complete(first, Ok(snapshot("Paris", 5.0))).unwrap_err();
        assert!(matches!(err, WidgetError::Superseded { token: 1 }));
        assert!(widget.is_loading());
        assert!(widget.snapshot().is_none());

        widget.complete(second, Ok(snapshot("London", 12.0))).expect("applied");
        assert!(!widget.is_loading());
        assert_eq!(widget.snapshot(), Some(&snapshot("London", 12.0)));
    }

    #[test]
    fn stale_failure_leaves_newer_snapshot_intact() {
        let mut widget = Widget::new(StubProvider::default());

        widget.set_input("Paris");
        let first = widget.begin_submit().expect("valid input");
        widget.set_input("London");
        let second = widget.begin_submit().expect("valid input");

        widget.complete(second, Ok(snapshot("London", 12.0))).expect("applied");
        let _ = widget.complete(first, Err(FetchError::Parse("late".into())));

        assert_eq!(widget.snapshot(), Some(&snapshot("London", 12.0)));
        assert_eq!(widget.error(), None);
    }

    #[test]
    fn blank_submission_supersedes_search_in_flight() {
        let mut widget = Widget::new(StubProvider::default());

        widget.set_input("Paris");
        let pending = widget.begin_submit().expect("valid input");
        widget.set_input("  ");
        assert!(widget.begin_submit().is_none());
        assert!(!widget.is_loading());

        let err = widget.complete(pending, Ok(snapshot("Paris", 22.0))).unwrap_err();

        assert!(matches!(err, WidgetError::Superseded { .. }));
        assert!(widget.snapshot().is_none());
        assert_eq!(widget.error(), Some("Please enter a location"));
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn view_formats_all_three_lines() {
        let mut widget = Widget::new(StubProvider::default());
        assert!(widget.view(&FixedClock(12)).is_none());

        widget.set_input("Paris");
        widget.submit().await.expect("success");

        let view = widget.view(&FixedClock(21)).expect("snapshot present");
        assert_eq!(view.temperature, "The temperature is 22°C. Perfect Weather!.");
        assert_eq!(view.condition, "It's a beautiful sunny day!");
        assert_eq!(view.location, "Paris at Night");
    }
}
