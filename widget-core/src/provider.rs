use crate::{
    Config, WeatherSnapshot, error::FetchError, provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions for a free-text location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        (**self).current(location).await
    }
}

/// Construct the weatherapi.com provider from config.
///
/// A missing API key is not rejected here: requests go out with an empty key
/// and fail like any other non-success response.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    if !config.has_api_key() {
        tracing::warn!(
            "No weather API key configured; requests will fail. \
             Set {} or run `weather-widget configure`.",
            crate::config::API_KEY_ENV
        );
    }

    Box::new(
        WeatherApiProvider::new(config.api_key().to_owned())
            .with_base_url(config.base_url().to_owned()),
    )
}
