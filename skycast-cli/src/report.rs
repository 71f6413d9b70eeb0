//! Human-friendly rendering of a weather document.

use std::fmt;

use skycast_core::model::LocationWeather;

/// Displayable report over a fetched weather document. The headline carries
/// the current temperature; detail lines cover the rest of today's
/// observation.
pub struct Report<'a> {
    weather: &'a LocationWeather,
}

impl<'a> Report<'a> {
    pub fn new(weather: &'a LocationWeather) -> Self {
        Self { weather }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The provider rejects documents without observations; keep the
        // rendering total anyway.
        let Some(current) = self.weather.current() else {
            return write!(f, "No weather data available for {}", self.weather.title);
        };

        writeln!(
            f,
            "Current weather in {} is {:.0} °C",
            self.weather.title, current.the_temp
        )?;
        writeln!(f, "  Condition:  {}", current.weather_state_name)?;
        writeln!(
            f,
            "  Range:      {:.0} °C to {:.0} °C",
            current.min_temp, current.max_temp
        )?;
        writeln!(f, "  Humidity:   {:.0} %", current.humidity)?;
        writeln!(
            f,
            "  Wind:       {:.0} mph {}",
            current.wind_speed, current.wind_direction_compass
        )?;
        writeln!(f, "  Pressure:   {:.0} mbar", current.air_pressure)?;
        writeln!(f, "  Visibility: {:.1} miles", current.visibility)?;
        write!(f, "  Local time: {}", self.weather.time.format("%H:%M"))
    }
}
