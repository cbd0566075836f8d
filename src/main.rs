use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::EnvFilter;

use nearby_wx::app::{run_app, App, Location};
use nearby_wx::badge::{BadgeOutcome, BadgeService, BadgeSink};
use nearby_wx::cli::{Args, Command};
use nearby_wx::conversion;
use nearby_wx::owm::WeatherInformation;
use nearby_wx::preferences::{Preferences, PreferencesService};
use nearby_wx::{DaytimeWindow, GeoCoordinates, TzfResolver};

/// Prints badge updates instead of touching an app icon.
struct ConsoleSink;

impl BadgeSink for ConsoleSink {
    fn set_badge_count(&mut self, count: u32) {
        tracing::info!(count, "badge count set");
        println!("badge: {count}");
    }

    fn notify(&mut self, title: &str, body: &str) {
        tracing::info!(title, body, "notification");
        println!("{title}: {body}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_preferences(args: &Args) -> anyhow::Result<Preferences> {
    let mut prefs = match &args.config {
        Some(path) => Preferences::load(path)
            .with_context(|| format!("loading preferences from {}", path.display()))?,
        None => Preferences::default(),
    };
    if let Some(unit) = args.temperature_unit {
        prefs.temperature_unit = unit;
    }
    if let Some(unit) = args.distance_unit {
        prefs.distance_unit = unit;
    }
    if args.api_key.is_some() {
        prefs.api_key = args.api_key.clone();
    }
    Ok(prefs)
}

fn run_list(
    preferences: &PreferencesService,
    files: &[std::path::PathBuf],
    coordinates: &[(f64, f64)],
) -> anyhow::Result<()> {
    let api_key = preferences.current().api_key;
    let mut locations = Vec::new();
    for path in files {
        let info = WeatherInformation::from_file(path)?;
        locations.push(Location {
            info,
            is_bookmark: true,
        });
    }
    for &(lat, lon) in coordinates {
        let info = WeatherInformation::from_coordinates(lat, lon, api_key.as_deref())
            .with_context(|| format!("fetching weather at {lat},{lon}"))?;
        locations.push(Location {
            info,
            is_bookmark: false,
        });
    }
    if locations.is_empty() {
        anyhow::bail!("nothing to show, pass --file or --at");
    }

    let resolver = TzfResolver::new();
    let mut app = App::new(locations, preferences, &resolver);

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("running weather list")
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let prefs = load_preferences(&args)?;
    let temperature_unit = prefs.temperature_unit;
    let distance_unit = prefs.distance_unit;

    match &args.command {
        Command::Symbol { code } => {
            let symbol = conversion::weather_condition_symbol(*code);
            println!("{symbol} ({symbol:?})");
        }
        Command::Temperature { kelvin } => {
            let descriptor = conversion::temperature_descriptor(temperature_unit, *kelvin);
            match conversion::temperature_value(temperature_unit, *kelvin) {
                Some(value) => println!("{descriptor} (~{value})"),
                None => println!("{descriptor}"),
            }
        }
        Command::Wind { kmh } => {
            println!("{}", conversion::windspeed_descriptor(distance_unit, *kmh));
        }
        Command::Distance { metres } => {
            println!("{}", conversion::distance_descriptor(distance_unit, *metres));
        }
        Command::Direction { degrees } => {
            println!("{}", conversion::wind_direction_descriptor(*degrees));
        }
        Command::Daytime {
            lat,
            lon,
            sunrise,
            sunset,
        } => {
            let window = DaytimeWindow {
                sunrise: *sunrise,
                sunset: *sunset,
            };
            let resolver = TzfResolver::new();
            let coordinates = GeoCoordinates::new(*lat, *lon);
            match conversion::is_day_time(&resolver, &coordinates, Some(&window)) {
                Some(true) => println!("day"),
                Some(false) => println!("night"),
                None => println!("unknown"),
            }
        }
        Command::Badge { file, last } => {
            let info = WeatherInformation::from_file(file)?;
            let preferred = match &prefs.preferred_bookmark {
                Some(name) if *name != info.name => {
                    tracing::warn!(preferred = %name, found = %info.name, "not the preferred bookmark");
                    None
                }
                _ => Some(&info),
            };
            let mut badges = BadgeService::with_last_temperature(ConsoleSink, *last);
            let outcome =
                badges.update(prefs.show_temperature_on_icon, true, preferred, temperature_unit);
            if outcome == BadgeOutcome::Unchanged {
                println!("badge unchanged");
            }
        }
        Command::List { files, coordinates } => {
            let preferences = PreferencesService::new(prefs);
            run_list(&preferences, files, coordinates)?;
        }
    }

    Ok(())
}
