use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the location lookup chain.
///
/// Every variant renders as a complete sentence: the CLI shows `Display`
/// output directly when a fetch fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("could not reach the weather service: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The location search returned zero candidates.
    #[error("no location found for \"{query}\"")]
    LocationNotFound { query: String },

    /// The location document carried no consolidated weather entries.
    #[error("no weather data available for {title}")]
    MissingWeatherData { title: String },
}

pub type Result<T> = std::result::Result<T, Error>;
