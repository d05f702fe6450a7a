//! Eorzea Weather - command line forecast
//!
//! Terminal front end for the forecast engine: prints the current
//! conditions and a forecast table for one zone. All weather logic lives
//! in the library; this binary only formats output.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use eorzea_weather::core::error::Result;
use eorzea_weather::forecast::clock::EorzeaTime;
use eorzea_weather::forecast::resolver::{forecast, get_weather};
use eorzea_weather::zones::loader::load_zone_tables;
use eorzea_weather::zones::registry::ZoneRegistry;

/// Forecast in-game weather for a zone
#[derive(Parser, Debug)]
#[command(name = "eorzea-weather")]
#[command(about = "Print the weather forecast for a zone of Eorzea")]
struct Args {
    /// Zone identifier, any spelling ("la-noscea", "La Noscea", ...)
    zone: String,

    /// Number of in-game days to forecast
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// Unix milliseconds to forecast from (defaults to now)
    #[arg(long)]
    from: Option<i64>,

    /// Directory of zone table data files overriding the built-ins
    #[arg(long)]
    zones_dir: Option<PathBuf>,

    /// List the configured zones and exit
    #[arg(long, default_value_t = false)]
    list_zones: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("eorzea_weather=info")
        .init();

    let args = Args::parse();

    let mut registry = ZoneRegistry::builtin();
    let data_dir = args.zones_dir.unwrap_or_else(|| PathBuf::from("zones"));
    if data_dir.exists() {
        let loaded = load_zone_tables(&data_dir, &mut registry)?;
        tracing::info!(count = loaded, dir = %data_dir.display(), "loaded zone tables");
    }

    if args.list_zones {
        let mut keys: Vec<_> = registry.zone_keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        for key in keys {
            println!("{}", key);
        }
        return Ok(());
    }

    let from = args.from.unwrap_or_else(now_unix_ms);
    let now_et = EorzeaTime::from_unix_ms(from);
    let current = get_weather(&registry, from, &args.zone)?;

    println!(
        "{}: {} (ET {} on day {})",
        args.zone,
        current.name(),
        now_et.formatted(),
        now_et.day()
    );
    println!();
    println!("{:<14} {:<18} {:<18} {:<18}", "day", "00:00 - 07:59", "08:00 - 15:59", "16:00 - 23:59");

    let rows = forecast(&registry, &args.zone, from, args.days)?;
    for row in rows {
        println!(
            "{:<14} {:<18} {:<18} {:<18}",
            row[0].window.day(),
            cell(row[0].weather.name(), row[0].start_unix_ms, from),
            cell(row[1].weather.name(), row[1].start_unix_ms, from),
            cell(row[2].weather.name(), row[2].start_unix_ms, from),
        );
    }

    Ok(())
}

/// Mark the window containing the reference instant, like the zone page
/// highlights the active cell
fn cell(name: &str, start_ms: i64, now_ms: i64) -> String {
    if start_ms <= now_ms && now_ms < start_ms + 1_400_000 {
        format!("[{}]", name)
    } else {
        name.to_string()
    }
}

fn now_unix_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
