//! Forecast engine - deterministic weather from the shared in-game clock
//!
//! Conversion is a chain of pure functions: a real instant becomes a
//! weather window, the window mixes into a seed, the seed resolves
//! against a zone's table. No state, no I/O, no randomness source.

pub mod clock;
pub mod resolver;
pub mod seed;

pub use clock::{EorzeaTime, WeatherWindow};
pub use resolver::{forecast, get_weather, WindowForecast};
pub use seed::window_seed;
