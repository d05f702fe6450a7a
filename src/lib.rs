//! Eorzea Weather - deterministic forecast engine for the in-game clock

pub mod core;
pub mod forecast;
pub mod zones;

pub use crate::core::{Result, UnixMs, Weather, WeatherError, ZoneKey};
pub use crate::forecast::{forecast, get_weather, EorzeaTime, WeatherWindow, WindowForecast};
pub use crate::zones::{load_zone_tables, ZoneRegistry};
