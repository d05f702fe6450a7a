//! Zone registry mapping normalized keys to weather tables
//!
//! Built once at startup, read-only afterwards; lookups never mutate.

use ahash::AHashMap;

use crate::core::error::{Result, WeatherError};
use crate::core::types::{Weather, ZoneKey};
use crate::zones::data::builtin_zone_tables;
use crate::zones::table::WeatherTable;

/// All configured zones and their weather tables
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    tables: AHashMap<ZoneKey, WeatherTable>,
}

impl ZoneRegistry {
    /// Registry with no zones configured
    pub fn empty() -> Self {
        Self {
            tables: AHashMap::new(),
        }
    }

    /// Registry preloaded with the built-in zone tables
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (zone, buckets) in builtin_zone_tables() {
            let table = WeatherTable::new(buckets).expect("built-in zone tables are valid");
            registry.insert(ZoneKey::normalize(zone), table);
        }
        registry
    }

    /// Add or replace a zone's table
    pub fn insert(&mut self, key: ZoneKey, table: WeatherTable) {
        self.tables.insert(key, table);
    }

    /// Look up a zone's table by any spelling of its identifier
    pub fn table(&self, zone: &str) -> Result<&WeatherTable> {
        let key = ZoneKey::normalize(zone);
        self.tables
            .get(&key)
            .ok_or_else(|| WeatherError::UnknownZone(zone.to_string()))
    }

    /// Resolve a seed against a zone's table
    pub fn resolve(&self, zone: &str, seed: u8) -> Result<Weather> {
        self.table(zone)?
            .lookup(seed)
            .ok_or_else(|| WeatherError::CorruptTable {
                zone: ZoneKey::normalize(zone).as_str().to_string(),
                seed,
            })
    }

    /// Normalized keys of every configured zone
    pub fn zone_keys(&self) -> impl Iterator<Item = &ZoneKey> {
        self.tables.keys()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_zones() {
        let registry = ZoneRegistry::builtin();
        assert!(!registry.is_empty());
        assert!(registry.table("la-noscea").is_ok());
        assert!(registry.table("mor-dhona").is_ok());
    }

    #[test]
    fn test_lookup_accepts_any_spelling() {
        let registry = ZoneRegistry::builtin();
        assert!(registry.table("La Noscea").is_ok());
        assert!(registry.table("LA_NOSCEA").is_ok());
        assert!(registry.table("Ul'dah").is_ok());
    }

    #[test]
    fn test_unknown_zone_is_an_error() {
        let registry = ZoneRegistry::builtin();
        let err = registry.resolve("not-a-real-zone", 50).unwrap_err();
        assert!(matches!(err, WeatherError::UnknownZone(_)));
    }

    #[test]
    fn test_every_zone_covers_every_seed() {
        let registry = ZoneRegistry::builtin();
        for key in registry.zone_keys() {
            for seed in 0..100u8 {
                assert!(
                    registry.resolve(key.as_str(), seed).is_ok(),
                    "zone '{}' has no bucket for seed {}",
                    key,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_corrupt_table_is_reported() {
        // A table that slipped past validation (e.g. hand-edited data
        // deserialized directly) must fail loudly, not fall through.
        let table: WeatherTable = toml::from_str(
            r#"
buckets = [{ weather = "Snow", threshold = 40 }]
"#,
        )
        .unwrap();

        let mut registry = ZoneRegistry::empty();
        registry.insert(ZoneKey::normalize("broken-zone"), table);

        assert!(registry.resolve("broken-zone", 10).is_ok());
        let err = registry.resolve("broken-zone", 40).unwrap_err();
        assert!(matches!(err, WeatherError::CorruptTable { seed: 40, .. }));
    }
}
