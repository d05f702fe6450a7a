//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Real-world instant as Unix epoch milliseconds (negative = pre-epoch)
pub type UnixMs = i64;

/// Weather conditions drawn from the fixed, zone-independent vocabulary
///
/// The engine returns these abstract tags; mapping to localized display
/// strings is the presentation layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    ClearSkies,
    FairSkies,
    Clouds,
    Fog,
    Wind,
    Gales,
    Rain,
    Showers,
    Thunder,
    Thunderstorms,
    DustStorms,
    HeatWaves,
    Snow,
    Blizzards,
    Gloom,
}

impl Weather {
    /// Stable identifier used in zone table data files
    pub fn name(&self) -> &'static str {
        match self {
            Weather::ClearSkies => "ClearSkies",
            Weather::FairSkies => "FairSkies",
            Weather::Clouds => "Clouds",
            Weather::Fog => "Fog",
            Weather::Wind => "Wind",
            Weather::Gales => "Gales",
            Weather::Rain => "Rain",
            Weather::Showers => "Showers",
            Weather::Thunder => "Thunder",
            Weather::Thunderstorms => "Thunderstorms",
            Weather::DustStorms => "DustStorms",
            Weather::HeatWaves => "HeatWaves",
            Weather::Snow => "Snow",
            Weather::Blizzards => "Blizzards",
            Weather::Gloom => "Gloom",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "ClearSkies" => Some(Weather::ClearSkies),
            "FairSkies" => Some(Weather::FairSkies),
            "Clouds" => Some(Weather::Clouds),
            "Fog" => Some(Weather::Fog),
            "Wind" => Some(Weather::Wind),
            "Gales" => Some(Weather::Gales),
            "Rain" => Some(Weather::Rain),
            "Showers" => Some(Weather::Showers),
            "Thunder" => Some(Weather::Thunder),
            "Thunderstorms" => Some(Weather::Thunderstorms),
            "DustStorms" => Some(Weather::DustStorms),
            "HeatWaves" => Some(Weather::HeatWaves),
            "Snow" => Some(Weather::Snow),
            "Blizzards" => Some(Weather::Blizzards),
            "Gloom" => Some(Weather::Gloom),
            _ => None,
        }
    }
}

/// Normalized zone identifier
///
/// Route parameters and data files spell zones differently ("La Noscea",
/// "la-noscea", "LA_NOSCEA"); all collapse to the same key before table
/// lookup. Apostrophes are dropped ("Ul'dah" -> "uldah"), any run of
/// other separators becomes a single hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneKey(String);

impl ZoneKey {
    pub fn normalize(raw: &str) -> Self {
        let mut key = String::with_capacity(raw.len());
        let mut pending_sep = false;
        for c in raw.chars() {
            if c.is_alphanumeric() {
                if pending_sep && !key.is_empty() {
                    key.push('-');
                }
                pending_sep = false;
                for lower in c.to_lowercase() {
                    key.push(lower);
                }
            } else if c == '\'' {
                // "Ul'dah" and "Uldah" are the same zone
            } else {
                pending_sep = true;
            }
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
