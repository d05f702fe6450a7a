//! Weather resolution - the public forecast entry point
//!
//! Pure composition: instant -> window -> seed -> zone table -> condition.
//! Referentially transparent, so callers may memoize results keyed by
//! (day, slot, zone); the condition is constant across a whole window.

use serde::Serialize;

use crate::core::error::{Result, WeatherError};
use crate::core::types::{UnixMs, Weather, ZoneKey};
use crate::forecast::clock::WeatherWindow;
use crate::forecast::seed::window_seed;
use crate::zones::registry::ZoneRegistry;

/// Weather in a zone at a real-world instant
pub fn get_weather(registry: &ZoneRegistry, instant_ms: UnixMs, zone: &str) -> Result<Weather> {
    let window = WeatherWindow::containing(instant_ms);
    registry.resolve(zone, window_seed(window))
}

/// One resolved window of a forecast table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowForecast {
    pub window: WeatherWindow,
    pub start_unix_ms: UnixMs,
    pub weather: Weather,
}

/// Forecast table for a zone: `days` rows of three windows each
///
/// Rows start at the in-game day containing `from_ms`, matching how the
/// zone page renders its table (the current window appears in row 0).
pub fn forecast(
    registry: &ZoneRegistry,
    zone: &str,
    from_ms: UnixMs,
    days: u32,
) -> Result<Vec<[WindowForecast; 3]>> {
    let table = registry.table(zone)?;
    let key = ZoneKey::normalize(zone);

    let resolve_window = |window: WeatherWindow| -> Result<WindowForecast> {
        let seed = window_seed(window);
        let weather = table
            .lookup(seed)
            .ok_or_else(|| WeatherError::CorruptTable {
                zone: key.as_str().to_string(),
                seed,
            })?;
        Ok(WindowForecast {
            window,
            start_unix_ms: window.start_unix_ms(),
            weather,
        })
    };

    let mut window = WeatherWindow::start_of_day(from_ms);
    let mut rows = Vec::with_capacity(days as usize);
    for _ in 0..days {
        let morning = resolve_window(window)?;
        let afternoon = resolve_window(window.next())?;
        let night = resolve_window(window.next().next())?;
        rows.push([morning, afternoon, night]);
        window = window.next().next().next();
    }

    Ok(rows)
}
