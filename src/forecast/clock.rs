//! Eorzea clock - converts real instants to the shared in-game timeline
//!
//! This module provides the constants and conversions for the in-game
//! clock. The clock advances at a fixed multiple of real time and is the
//! same for every player, which is what makes forecasts reproducible.

use serde::{Deserialize, Serialize};

use crate::core::types::UnixMs;

// ============================================================================
// Constants
// ============================================================================

/// Real-world seconds per in-game hour (bell)
pub const SECONDS_PER_BELL: i64 = 175;

/// Bells per in-game day
pub const BELLS_PER_DAY: i64 = 24;

/// Bells per weather window
pub const BELLS_PER_WINDOW: i64 = 8;

/// Weather windows per in-game day
pub const WINDOWS_PER_DAY: u8 = 3;

/// Real-world seconds per in-game day (4200)
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_BELL * BELLS_PER_DAY;

/// Real-world seconds per weather window (1400)
pub const SECONDS_PER_WINDOW: i64 = SECONDS_PER_BELL * BELLS_PER_WINDOW;

// ============================================================================
// Eorzea time
// ============================================================================

/// A point on the in-game clock, derived from a real-world instant
///
/// `day` counts complete in-game days since the Unix epoch and is negative
/// for pre-epoch instants. `bell` and `minute` are the in-game time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EorzeaTime {
    day: i64,
    bell: u8,
    minute: u8,
}

impl EorzeaTime {
    /// Convert a real-world instant to in-game time
    ///
    /// Total over all of `i64`; Euclidean division keeps bell and minute
    /// in range for pre-epoch instants.
    pub fn from_unix_ms(ms: UnixMs) -> Self {
        let secs = ms.div_euclid(1000);
        let total_bells = secs.div_euclid(SECONDS_PER_BELL);
        let day = total_bells.div_euclid(BELLS_PER_DAY);
        let bell = total_bells.rem_euclid(BELLS_PER_DAY) as u8;
        let minute = (secs.rem_euclid(SECONDS_PER_BELL) * 60 / SECONDS_PER_BELL) as u8;
        Self { day, bell, minute }
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    /// In-game hour of day (0-23)
    pub fn bell(&self) -> u8 {
        self.bell
    }

    /// In-game minute of the bell (0-59)
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Clock readout as "HH:MM"
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}", self.bell, self.minute)
    }
}

// ============================================================================
// Weather windows
// ============================================================================

/// One 8-bell slice of an in-game day during which weather is constant
///
/// Windows start at bells 0, 8 and 16; each lasts 1400 real seconds.
/// `(day, slot)` uniquely identifies a window on the shared timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeatherWindow {
    day: i64,
    slot: u8,
}

impl WeatherWindow {
    /// The window a real-world instant falls in
    ///
    /// Pure floor operation: every instant inside the same 1400-second
    /// span maps to the identical window.
    pub fn containing(ms: UnixMs) -> Self {
        let secs = ms.div_euclid(1000);
        let total_bells = secs.div_euclid(SECONDS_PER_BELL);
        let day = total_bells.div_euclid(BELLS_PER_DAY);
        let slot = (total_bells.rem_euclid(BELLS_PER_DAY) / BELLS_PER_WINDOW) as u8;
        Self { day, slot }
    }

    /// The first window (start bell 0) of the day containing an instant
    pub fn start_of_day(ms: UnixMs) -> Self {
        Self {
            day: Self::containing(ms).day,
            slot: 0,
        }
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    /// Which 8-bell slice of the day (0, 1, or 2)
    pub fn slot(&self) -> u8 {
        self.slot
    }

    /// The bell at which this window begins (0, 8, or 16)
    pub fn start_bell(&self) -> u8 {
        self.slot * BELLS_PER_WINDOW as u8
    }

    /// The first real-world millisecond of this window
    pub fn start_unix_ms(&self) -> UnixMs {
        (self.day * SECONDS_PER_DAY + i64::from(self.slot) * SECONDS_PER_WINDOW) * 1000
    }

    /// The window immediately after this one
    pub fn next(&self) -> Self {
        if self.slot + 1 < WINDOWS_PER_DAY {
            Self {
                day: self.day,
                slot: self.slot + 1,
            }
        } else {
            Self {
                day: self.day + 1,
                slot: 0,
            }
        }
    }

    /// The window immediately before this one
    pub fn prev(&self) -> Self {
        if self.slot > 0 {
            Self {
                day: self.day,
                slot: self.slot - 1,
            }
        } else {
            Self {
                day: self.day - 1,
                slot: WINDOWS_PER_DAY - 1,
            }
        }
    }
}
