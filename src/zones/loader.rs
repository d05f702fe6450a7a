//! Load zone weather tables from TOML files
//!
//! Zone tables are versioned data. Each file in the directory describes
//! one zone:
//!
//! ```toml
//! zone = "La Noscea"
//!
//! [[buckets]]
//! weather = "Clouds"
//! threshold = 20
//! ```
//!
//! Thresholds are cumulative and must strictly increase to exactly 100;
//! files violating that are rejected at load time rather than surfacing
//! later as corrupt lookups.

use std::fs;
use std::path::Path;

use crate::core::error::{Result, WeatherError};
use crate::core::types::{Weather, ZoneKey};
use crate::zones::registry::ZoneRegistry;
use crate::zones::table::WeatherTable;

/// Load every `.toml` table in a directory into the registry
///
/// Returns the number of zones loaded. Existing entries with the same
/// normalized key are replaced, so a data directory can override the
/// built-in tables.
pub fn load_zone_tables(dir: &Path, registry: &mut ZoneRegistry) -> Result<usize> {
    let mut loaded = 0;

    let mut entries: Vec<_> = fs::read_dir(dir)?
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    entries.sort();

    for path in entries {
        let content = fs::read_to_string(&path)?;
        let (key, table) = parse_zone_toml(&content)
            .map_err(|e| WeatherError::TableData(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(zone = %key, "loaded weather table");
        registry.insert(key, table);
        loaded += 1;
    }

    Ok(loaded)
}

fn parse_zone_toml(content: &str) -> std::result::Result<(ZoneKey, WeatherTable), String> {
    let toml: toml::Value = content.parse().map_err(|e| format!("invalid TOML: {}", e))?;

    let zone = toml
        .get("zone")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing zone name".to_string())?;
    let key = ZoneKey::normalize(zone);
    if key.as_str().is_empty() {
        return Err(format!("zone name '{}' normalizes to nothing", zone));
    }

    let buckets = toml
        .get("buckets")
        .and_then(|v| v.as_array())
        .ok_or_else(|| format!("{}: missing buckets array", key))?;

    let mut parsed = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        let weather_str = bucket
            .get("weather")
            .and_then(|v| v.as_str())
            .ok_or_else(|| format!("{}: bucket missing weather", key))?;
        let weather = Weather::from_name(weather_str)
            .ok_or_else(|| format!("{}: unknown weather '{}'", key, weather_str))?;

        let threshold = bucket
            .get("threshold")
            .and_then(|v| v.as_integer())
            .ok_or_else(|| format!("{}: bucket missing threshold", key))?;
        if !(1..=100).contains(&threshold) {
            return Err(format!("{}: threshold {} out of range", key, threshold));
        }

        parsed.push((weather, threshold as u8));
    }

    let table = WeatherTable::new(parsed).map_err(|e| format!("{}: {}", key, e))?;
    Ok((key, table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zone_table() {
        let toml_str = r#"
zone = "La Noscea"

[[buckets]]
weather = "Clouds"
threshold = 20

[[buckets]]
weather = "ClearSkies"
threshold = 50

[[buckets]]
weather = "Rain"
threshold = 100
"#;
        let (key, table) = parse_zone_toml(toml_str).unwrap();
        assert_eq!(key.as_str(), "la-noscea");
        assert_eq!(table.buckets().len(), 3);
        assert_eq!(table.lookup(25), Some(Weather::ClearSkies));
    }

    #[test]
    fn test_parse_rejects_unknown_weather() {
        let toml_str = r#"
zone = "somewhere"

[[buckets]]
weather = "Drizzle"
threshold = 100
"#;
        let err = parse_zone_toml(toml_str).unwrap_err();
        assert!(err.contains("Drizzle"));
    }

    #[test]
    fn test_parse_rejects_non_ascending_thresholds() {
        let toml_str = r#"
zone = "somewhere"

[[buckets]]
weather = "Rain"
threshold = 60

[[buckets]]
weather = "Fog"
threshold = 40

[[buckets]]
weather = "Clouds"
threshold = 100
"#;
        assert!(parse_zone_toml(toml_str).is_err());
    }

    #[test]
    fn test_parse_rejects_non_terminating_table() {
        let toml_str = r#"
zone = "somewhere"

[[buckets]]
weather = "Rain"
threshold = 90
"#;
        assert!(parse_zone_toml(toml_str).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_zone_name() {
        let toml_str = r#"
[[buckets]]
weather = "Rain"
threshold = 100
"#;
        assert!(parse_zone_toml(toml_str).is_err());
    }

    #[test]
    fn test_load_shipped_zone_directory() {
        let zones_dir = Path::new("zones");
        if zones_dir.exists() {
            let mut registry = ZoneRegistry::empty();
            let loaded = load_zone_tables(zones_dir, &mut registry).unwrap();
            assert!(loaded > 0, "zones/ directory should contain tables");
            assert_eq!(loaded, registry.len());
        }
    }
}
