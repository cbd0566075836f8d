//! Display conversions for a nearby-weather client: unit conversion and
//! formatting, condition symbols, day/night state, and the icon badge.

pub mod app;
pub mod badge;
pub mod cli;
pub mod conversion;
pub mod daytime;
pub mod error;
pub mod events;
pub mod list;
pub mod owm;
pub mod preferences;
pub mod units;
pub mod weather;

pub use daytime::{DaytimeWindow, GeoCoordinates, TimezoneResolver, TzfResolver};
pub use error::{Error, Result};
pub use units::{DistanceVelocityUnit, TemperatureUnit};
pub use weather::Symbol;
