use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::{Parser, Subcommand};

use crate::units::{DistanceVelocityUnit, TemperatureUnit};

const ABOUT: &str = "Nearby weather conversions and TUI";

const LONG_ABOUT: &str = "
Display conversions for weather data: temperatures from Kelvin, wind speeds and distances in metric
or imperial units, condition codes as weather symbols, and day/night state from sunrise and sunset.

Weather data is OpenWeatherMap's current-weather JSON, either read from files or fetched by
coordinates (requires an API key, via --api-key, OWM_API_KEY, or the config file).

Preferences are read from a JSON config file (--config) and never written back.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(long, global = true, env = "NWX_CONFIG", help = "Path to the JSON preferences file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "Override the configured temperature unit")]
    pub temperature_unit: Option<TemperatureUnit>,

    #[arg(long, global = true, value_enum, help = "Override the configured distance/speed unit")]
    pub distance_unit: Option<DistanceVelocityUnit>,

    #[arg(long, global = true, env = "OWM_API_KEY", hide_env_values = true, help = "OpenWeatherMap API key")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Weather symbol for a condition code
    Symbol {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },

    /// Convert a Kelvin temperature
    Temperature {
        #[arg(allow_negative_numbers = true)]
        kelvin: f64,
    },

    /// Format a wind speed given in km/h
    Wind { kmh: f64 },

    /// Format a distance given in metres
    Distance { metres: f64 },

    /// Format a wind direction in degrees
    Direction { degrees: f64 },

    /// Whether it is day at a location
    Daytime {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, help = "Sunrise as Unix seconds")]
        sunrise: Option<i64>,
        #[arg(long, help = "Sunset as Unix seconds")]
        sunset: Option<i64>,
    },

    /// Compute the app-icon badge for a location's weather
    Badge {
        #[arg(long, help = "Current-weather JSON of the preferred location")]
        file: PathBuf,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true, help = "Previously shown signed temperature")]
        last: i64,
    },

    /// Show the weather list
    List {
        #[arg(long = "file", help = "Current-weather JSON file (repeatable)")]
        files: Vec<PathBuf>,
        #[arg(long = "at", value_parser = parse_coordinates, allow_hyphen_values = true, help = "LAT,LON to fetch (repeatable)")]
        coordinates: Vec<(f64, f64)>,
    },
}

fn parse_coordinates(s: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("bad longitude: {e}"))?;
    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("52.5,13.4"), Ok((52.5, 13.4)));
        assert_eq!(parse_coordinates("-33.9, 151.2"), Ok((-33.9, 151.2)));
        assert!(parse_coordinates("52.5").is_err());
        assert!(parse_coordinates("north,13").is_err());
    }

    #[test]
    fn test_parse_subcommand_with_overrides() {
        let args = Args::try_parse_from([
            "nwx",
            "temperature",
            "300",
            "--temperature-unit",
            "fahrenheit",
        ])
        .unwrap();
        assert_eq!(args.temperature_unit, Some(TemperatureUnit::Fahrenheit));
        assert!(matches!(args.command, Command::Temperature { kelvin } if kelvin == 300.0));
    }

    #[test]
    fn test_parse_negative_code() {
        let args = Args::try_parse_from(["nwx", "symbol", "-1"]).unwrap();
        assert!(matches!(args.command, Command::Symbol { code: -1 }));
    }
}
