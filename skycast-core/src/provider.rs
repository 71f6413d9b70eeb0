use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::LocationWeather;

pub mod metaweather;

/// A source of current weather, looked up by free-form location name.
///
/// `skycast-cli` consumes this as a trait object so the interactive session
/// can be exercised against a stub in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve `query` to a single location and return its weather document.
    ///
    /// The returned document always carries at least one observation.
    async fn current_weather(&self, query: &str) -> anyhow::Result<LocationWeather>;
}
