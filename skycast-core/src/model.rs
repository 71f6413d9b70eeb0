use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;

/// One row of the location search response.
///
/// `woeid` (Where-On-Earth ID) is the key used to fetch the full weather
/// document for the location.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationCandidate {
    pub woeid: i64,
    pub title: String,
}

/// Weather document for a single location.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationWeather {
    pub title: String,

    /// Local time at the location.
    pub time: DateTime<FixedOffset>,

    /// Consolidated observations, today first.
    pub consolidated_weather: Vec<Observation>,
}

impl LocationWeather {
    /// Today's observation, the one the UI renders.
    pub fn current(&self) -> Option<&Observation> {
        self.consolidated_weather.first()
    }
}

/// One consolidated weather entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    #[serde(with = "applicable_date")]
    pub applicable_date: NaiveDate,

    /// Human-readable condition, e.g. "Light Rain".
    pub weather_state_name: String,

    /// mph
    pub wind_speed: f64,

    /// Compass point the wind blows from, e.g. "NW".
    pub wind_direction_compass: String,

    /// °C
    pub min_temp: f64,
    /// °C
    pub max_temp: f64,
    /// °C
    pub the_temp: f64,

    /// mbar
    pub air_pressure: f64,

    /// percent
    pub humidity: f64,

    /// miles
    pub visibility: f64,
}

/// MetaWeather serializes dates as `2021/04/07`.
mod applicable_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    const FORMAT: &str = "%Y/%m/%d";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
