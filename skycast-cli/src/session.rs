//! The interactive session: a prompt → fetch → show cycle.
//!
//! Enter with a non-empty query moves from typing to loading; the fetch
//! outcome is shown and the session returns to the prompt. Esc or Ctrl+C at
//! the prompt ends the session; Ctrl+C during a fetch only cancels the fetch.

use anyhow::Result;
use inquire::{InquireError, Text};
use skycast_core::WeatherProvider;
use skycast_core::model::LocationWeather;

use crate::report::Report;
use crate::spinner::Spinner;

pub struct Session {
    provider: Box<dyn WeatherProvider>,
}

impl Session {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn run(self) -> Result<()> {
        loop {
            let Some(query) = prompt_location()? else {
                break;
            };

            match self.fetch(&query).await {
                Some(Ok(weather)) => println!("{}", Report::new(&weather)),
                Some(Err(err)) => eprintln!("Could not fetch weather: {err}"),
                None => eprintln!("interrupted"),
            }
        }

        Ok(())
    }

    /// Run the provider call behind a spinner. `None` means the user hit
    /// Ctrl+C mid-fetch; the in-flight request is dropped.
    async fn fetch(&self, query: &str) -> Option<Result<LocationWeather>> {
        let spinner = Spinner::start("fetching weather");

        let outcome = tokio::select! {
            result = self.provider.current_weather(query) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };

        spinner.stop().await;
        outcome
    }
}

/// Prompt until the user enters a usable query. `None` means the user left
/// the prompt (Esc or Ctrl+C).
fn prompt_location() -> Result<Option<String>> {
    loop {
        match Text::new("Enter location:").prompt() {
            Ok(raw) => {
                if let Some(query) = normalize_query(&raw) {
                    return Ok(Some(query));
                }
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Trim the raw input; whitespace-only input does not trigger a fetch.
fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}
