use crate::conversion;
use crate::daytime::{self, TimezoneResolver};
use crate::owm::WeatherInformation;
use crate::units::{DistanceVelocityUnit, TemperatureUnit};
use crate::weather::Symbol;

const MISSING: &str = "--";

/// One display row of the weather list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherListRow {
    pub city: String,
    pub symbol: Symbol,
    pub temperature: String,
    pub cloud_coverage: String,
    pub humidity: String,
    pub windspeed: String,
    pub is_day_time: bool,
    pub is_bookmark: bool,
}

impl WeatherListRow {
    pub fn build<R: TimezoneResolver + ?Sized>(
        info: &WeatherInformation,
        temperature_unit: TemperatureUnit,
        distance_unit: DistanceVelocityUnit,
        resolver: &R,
        is_bookmark: bool,
    ) -> Self {
        let window = info.daytime_window();
        let is_day_time =
            daytime::is_day_time(resolver, &info.coordinates(), Some(&window)).unwrap_or(true);
        Self::with_day_time(info, temperature_unit, distance_unit, is_day_time, is_bookmark)
    }

    /// Builds the row with an already known day/night state.
    pub fn with_day_time(
        info: &WeatherInformation,
        temperature_unit: TemperatureUnit,
        distance_unit: DistanceVelocityUnit,
        is_day_time: bool,
        is_bookmark: bool,
    ) -> Self {
        let symbol = info
            .condition_code()
            .map_or(Symbol::Unknown, conversion::weather_condition_symbol);
        Self {
            city: info.name.clone(),
            symbol,
            temperature: conversion::temperature_descriptor(
                temperature_unit,
                info.temperature_kelvin(),
            ),
            cloud_coverage: percentage(info.clouds.all),
            humidity: percentage(info.main.humidity),
            windspeed: conversion::windspeed_descriptor(distance_unit, info.windspeed_kph()),
            is_day_time,
            is_bookmark,
        }
    }
}

fn percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.0}%"),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daytime::{FixedResolver, GeoCoordinates};
    use crate::owm::tests::BERLIN_JSON;
    use chrono_tz::Tz;

    #[test]
    fn test_row_from_weather() {
        let info = WeatherInformation::from_json(BERLIN_JSON).unwrap();
        let row = WeatherListRow::with_day_time(
            &info,
            TemperatureUnit::Celsius,
            DistanceVelocityUnit::Metric,
            true,
            true,
        );
        assert_eq!(row.city, "Berlin");
        assert_eq!(row.symbol, Symbol::PartlyCloudy);
        assert_eq!(row.temperature, "20.00°C");
        assert_eq!(row.cloud_coverage, "40%");
        assert_eq!(row.humidity, "64%");
        assert_eq!(row.windspeed, "18.00 km/h");
        assert!(row.is_bookmark);
    }

    #[test]
    fn test_row_follows_units() {
        let info = WeatherInformation::from_json(BERLIN_JSON).unwrap();
        let row = WeatherListRow::with_day_time(
            &info,
            TemperatureUnit::Kelvin,
            DistanceVelocityUnit::Imperial,
            false,
            false,
        );
        assert_eq!(row.temperature, "293.15°K");
        assert_eq!(row.windspeed, "11.18 mph");
    }

    #[test]
    fn test_missing_fields() {
        let info = WeatherInformation::from_json(
            r#"{"coord": {"lon": 0.0, "lat": 0.0}, "main": {"temp": 273.15}}"#,
        )
        .unwrap();
        let row = WeatherListRow::build(
            &info,
            TemperatureUnit::Celsius,
            DistanceVelocityUnit::Metric,
            &FixedResolver(Tz::UTC),
            false,
        );
        assert_eq!(row.symbol, Symbol::Unknown);
        assert_eq!(row.cloud_coverage, "--");
        assert_eq!(row.humidity, "--");
        // no sunrise/sunset defaults to day
        assert!(row.is_day_time);
    }

    #[test]
    fn test_unresolvable_zone_defaults_to_day() {
        struct Nowhere;
        impl TimezoneResolver for Nowhere {
            fn resolve(&self, _coordinates: &GeoCoordinates) -> Option<Tz> {
                None
            }
        }
        let info = WeatherInformation::from_json(BERLIN_JSON).unwrap();
        let row = WeatherListRow::build(
            &info,
            TemperatureUnit::Celsius,
            DistanceVelocityUnit::Metric,
            &Nowhere,
            false,
        );
        assert!(row.is_day_time);
    }
}
