//! Per-zone cumulative weather tables

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WeatherError};
use crate::core::types::Weather;

/// One bucket of a zone's weather table
///
/// `threshold` is cumulative: the bucket covers every seed from the
/// previous bucket's threshold (inclusive) up to this one (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherBucket {
    pub weather: Weather,
    pub threshold: u8,
}

/// Ordered cumulative-threshold table for one zone
///
/// Invariants: thresholds strictly increase and the final threshold is
/// exactly 100, so every seed in [0,100) matches exactly one bucket.
/// The same condition may appear in more than one bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherTable {
    buckets: Vec<WeatherBucket>,
}

impl WeatherTable {
    /// Build a table, validating the cumulative-threshold invariants
    pub fn new(buckets: Vec<(Weather, u8)>) -> Result<Self> {
        if buckets.is_empty() {
            return Err(WeatherError::TableData(
                "weather table has no buckets".to_string(),
            ));
        }

        let mut prev = 0u8;
        for &(weather, threshold) in &buckets {
            if threshold <= prev {
                return Err(WeatherError::TableData(format!(
                    "thresholds must strictly increase: {} at {} follows {}",
                    weather.name(),
                    threshold,
                    prev
                )));
            }
            prev = threshold;
        }

        if prev != 100 {
            return Err(WeatherError::TableData(format!(
                "final threshold must be 100, got {}",
                prev
            )));
        }

        Ok(Self {
            buckets: buckets
                .into_iter()
                .map(|(weather, threshold)| WeatherBucket { weather, threshold })
                .collect(),
        })
    }

    /// Resolve a seed against the table
    ///
    /// Returns the first bucket whose threshold is strictly greater than
    /// the seed; a seed equal to a threshold belongs to the NEXT bucket.
    /// `None` only when the table violates its invariants (corrupt data).
    pub fn lookup(&self, seed: u8) -> Option<Weather> {
        self.buckets
            .iter()
            .find(|bucket| seed < bucket.threshold)
            .map(|bucket| bucket.weather)
    }

    pub fn buckets(&self) -> &[WeatherBucket] {
        &self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coastal_table() -> WeatherTable {
        WeatherTable::new(vec![
            (Weather::Clouds, 20),
            (Weather::ClearSkies, 50),
            (Weather::FairSkies, 80),
            (Weather::Fog, 90),
            (Weather::Rain, 100),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_first_bucket() {
        let table = coastal_table();
        assert_eq!(table.lookup(0), Some(Weather::Clouds));
        assert_eq!(table.lookup(19), Some(Weather::Clouds));
    }

    #[test]
    fn test_boundary_seed_belongs_to_next_bucket() {
        let table = coastal_table();
        // Comparison is strict: seed 20 is past the Clouds bucket
        assert_eq!(table.lookup(20), Some(Weather::ClearSkies));
        assert_eq!(table.lookup(50), Some(Weather::FairSkies));
        assert_eq!(table.lookup(80), Some(Weather::Fog));
        assert_eq!(table.lookup(90), Some(Weather::Rain));
    }

    #[test]
    fn test_lookup_covers_whole_seed_range() {
        let table = coastal_table();
        for seed in 0..100u8 {
            assert!(table.lookup(seed).is_some(), "seed {} has no bucket", seed);
        }
    }

    #[test]
    fn test_repeated_condition_buckets_are_allowed() {
        // Forest zones list FairSkies twice in the published rates
        let table = WeatherTable::new(vec![
            (Weather::Rain, 20),
            (Weather::FairSkies, 55),
            (Weather::ClearSkies, 85),
            (Weather::FairSkies, 100),
        ])
        .unwrap();
        assert_eq!(table.lookup(54), Some(Weather::FairSkies));
        assert_eq!(table.lookup(85), Some(Weather::FairSkies));
    }

    #[test]
    fn test_rejects_non_ascending_thresholds() {
        let err = WeatherTable::new(vec![
            (Weather::Clouds, 50),
            (Weather::Rain, 50),
            (Weather::Fog, 100),
        ])
        .unwrap_err();
        assert!(matches!(err, WeatherError::TableData(_)));
    }

    #[test]
    fn test_rejects_non_terminating_table() {
        let err = WeatherTable::new(vec![(Weather::Clouds, 40), (Weather::Rain, 90)]).unwrap_err();
        assert!(matches!(err, WeatherError::TableData(_)));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(WeatherTable::new(Vec::new()).is_err());
    }

    #[test]
    fn test_corrupt_table_yields_no_bucket() {
        // Deserialization can bypass `new`; lookup stays defensive
        let table: WeatherTable = toml::from_str(
            r#"
buckets = [{ weather = "Rain", threshold = 60 }]
"#,
        )
        .unwrap();
        assert_eq!(table.lookup(59), Some(Weather::Rain));
        assert_eq!(table.lookup(60), None);
    }
}
