//! Core library for the `skycast` terminal client.
//!
//! This crate defines:
//! - Domain models for the MetaWeather API
//! - Typed errors for the location lookup chain
//! - Abstraction over weather providers, with MetaWeather as the single
//!   implementation
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod error;
pub mod model;
pub mod provider;

pub use error::{Error, Result};
pub use model::{LocationCandidate, LocationWeather, Observation};
pub use provider::{WeatherProvider, metaweather::MetaWeatherClient};
