//! Built-in zone weather tables
//!
//! Cumulative threshold rates for each shipped zone. These mirror the
//! versioned data files under `zones/`; the loader can replace any of
//! them at startup without a rebuild.

use crate::core::types::Weather::{self, *};

/// Raw (zone, buckets) data for every built-in zone
///
/// Each bucket is (condition, cumulative threshold); thresholds strictly
/// increase and end at 100.
pub(crate) fn builtin_zone_tables() -> Vec<(&'static str, Vec<(Weather, u8)>)> {
    vec![
        (
            "la-noscea",
            vec![
                (Clouds, 20),
                (ClearSkies, 50),
                (FairSkies, 80),
                (Fog, 90),
                (Rain, 100),
            ],
        ),
        (
            "limsa-lominsa",
            vec![
                (Clouds, 20),
                (ClearSkies, 50),
                (FairSkies, 80),
                (Fog, 90),
                (Rain, 100),
            ],
        ),
        (
            "eastern-la-noscea",
            vec![
                (Fog, 5),
                (ClearSkies, 50),
                (FairSkies, 80),
                (Clouds, 90),
                (Rain, 95),
                (Showers, 100),
            ],
        ),
        (
            "western-la-noscea",
            vec![
                (Fog, 10),
                (ClearSkies, 40),
                (FairSkies, 60),
                (Clouds, 80),
                (Wind, 90),
                (Gales, 100),
            ],
        ),
        (
            "upper-la-noscea",
            vec![
                (ClearSkies, 30),
                (FairSkies, 50),
                (Clouds, 70),
                (Fog, 80),
                (Thunder, 90),
                (Thunderstorms, 100),
            ],
        ),
        (
            "the-black-shroud",
            vec![
                (Rain, 20),
                (Fog, 30),
                (Clouds, 40),
                (FairSkies, 55),
                (ClearSkies, 85),
                (FairSkies, 100),
            ],
        ),
        (
            "gridania",
            vec![
                (Rain, 20),
                (Fog, 30),
                (Clouds, 40),
                (FairSkies, 55),
                (ClearSkies, 85),
                (FairSkies, 100),
            ],
        ),
        (
            "thanalan",
            vec![
                (DustStorms, 15),
                (Clouds, 55),
                (Fog, 75),
                (ClearSkies, 95),
                (Rain, 100),
            ],
        ),
        (
            "southern-thanalan",
            vec![
                (HeatWaves, 20),
                (ClearSkies, 60),
                (FairSkies, 80),
                (Clouds, 90),
                (Fog, 100),
            ],
        ),
        (
            "uldah",
            vec![
                (Clouds, 25),
                (ClearSkies, 65),
                (FairSkies, 85),
                (Fog, 95),
                (Rain, 100),
            ],
        ),
        (
            "coerthas",
            vec![
                (Blizzards, 20),
                (Snow, 60),
                (FairSkies, 70),
                (ClearSkies, 75),
                (Clouds, 90),
                (Fog, 100),
            ],
        ),
        (
            "mor-dhona",
            vec![
                (Clouds, 15),
                (Fog, 30),
                (Gloom, 60),
                (ClearSkies, 75),
                (FairSkies, 100),
            ],
        ),
    ]
}
