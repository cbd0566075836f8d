//! Display conversions for raw weather values.
//!
//! Every function here is pure: raw inputs are in canonical units (Kelvin,
//! km/h, metres) and the output is a display value or descriptor string.
//! Failures are expressed as `None`, never as errors.

use crate::daytime::{self, DaytimeWindow, GeoCoordinates, TimezoneResolver};
use crate::units::{distance, speed, temperature, DistanceVelocityUnit, TemperatureUnit};
use crate::weather::Symbol;

pub fn weather_condition_symbol(code: i32) -> Symbol {
    Symbol::from_code(code)
}

/// Converted temperature rounded half away from zero, or `None` when the
/// rounded result is not finite or does not fit in an `i64`.
pub fn temperature_value(unit: TemperatureUnit, raw_kelvin: f64) -> Option<i64> {
    let rounded = temperature::from_kelvin(unit, raw_kelvin).round();
    // i64::MAX as f64 is 2^63, one past the largest i64; NaN fails both sides
    let limit = i64::MAX as f64;
    if !(rounded >= -limit && rounded < limit) {
        return None;
    }
    Some(rounded as i64)
}

/// Two-decimal temperature with unit suffix, e.g. `21.85°C`. NaN and
/// infinities are rendered as-is.
pub fn temperature_descriptor(unit: TemperatureUnit, raw_kelvin: f64) -> String {
    let adjusted = temperature::from_kelvin(unit, raw_kelvin);
    format!("{adjusted:.2}{}", unit.suffix())
}

/// `kmh` is expected in km/h.
pub fn windspeed_descriptor(unit: DistanceVelocityUnit, kmh: f64) -> String {
    format!("{:.2} {}", speed::from_kph(unit, kmh), unit.speed_label())
}

pub fn distance_descriptor(unit: DistanceVelocityUnit, metres: f64) -> String {
    format!(
        "{:.2} {}",
        distance::from_metres(unit, metres),
        unit.distance_label()
    )
}

pub fn wind_direction_descriptor(degrees: f64) -> String {
    format!("{degrees:.2}°")
}

pub fn is_day_time<R: TimezoneResolver + ?Sized>(
    resolver: &R,
    coordinates: &GeoCoordinates,
    window: Option<&DaytimeWindow>,
) -> Option<bool> {
    daytime::is_day_time(resolver, coordinates, window)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    #[test]
    fn test_temperature_value() {
        assert_eq!(temperature_value(TemperatureUnit::Celsius, 273.15), Some(0));
        assert_eq!(temperature_value(TemperatureUnit::Celsius, 294.0), Some(21));
        assert_eq!(temperature_value(TemperatureUnit::Fahrenheit, 273.15), Some(32));
        assert_eq!(temperature_value(TemperatureUnit::Fahrenheit, 0.0), Some(-460));
        assert_eq!(temperature_value(TemperatureUnit::Kelvin, 300.4), Some(300));
        assert_eq!(temperature_value(TemperatureUnit::Kelvin, 0.0), Some(0));
    }

    #[test]
    fn test_temperature_value_rounds_half_away_from_zero() {
        assert_eq!(temperature_value(TemperatureUnit::Kelvin, 2.5), Some(3));
        assert_eq!(temperature_value(TemperatureUnit::Kelvin, -2.5), Some(-3));
        assert_eq!(temperature_value(TemperatureUnit::Celsius, 263.15), Some(-10));
    }

    #[test]
    fn test_temperature_value_matches_rounded_conversion() {
        for unit in UNITS {
            for k in [0.0, 1.0, 100.0, 250.25, 273.15, 310.0, 5000.0] {
                let expected = temperature::from_kelvin(unit, k).round() as i64;
                assert_eq!(temperature_value(unit, k), Some(expected), "{unit:?} {k}");
            }
        }
    }

    #[test]
    fn test_temperature_value_non_finite() {
        for unit in UNITS {
            assert_eq!(temperature_value(unit, f64::NAN), None);
            assert_eq!(temperature_value(unit, f64::INFINITY), None);
            assert_eq!(temperature_value(unit, f64::NEG_INFINITY), None);
        }
    }

    #[test]
    fn test_temperature_value_out_of_i64_range() {
        for unit in UNITS {
            assert_eq!(temperature_value(unit, 1e300), None, "{unit:?}");
            assert_eq!(temperature_value(unit, -1e300), None, "{unit:?}");
        }
        assert_eq!(temperature_value(TemperatureUnit::Kelvin, 9.3e18), None);
        assert_eq!(temperature_value(TemperatureUnit::Kelvin, 1e18), Some(1_000_000_000_000_000_000));
        assert_eq!(
            temperature_value(TemperatureUnit::Kelvin, -9_223_372_036_854_775_808.0),
            Some(i64::MIN)
        );
    }

    #[test]
    fn test_temperature_descriptor() {
        assert_eq!(temperature_descriptor(TemperatureUnit::Celsius, 295.0), "21.85°C");
        assert_eq!(temperature_descriptor(TemperatureUnit::Fahrenheit, 273.15), "32.00°F");
        assert_eq!(temperature_descriptor(TemperatureUnit::Kelvin, 295.0), "295.00°K");
        assert_eq!(temperature_descriptor(TemperatureUnit::Celsius, f64::NAN), "NaN°C");
        assert_eq!(temperature_descriptor(TemperatureUnit::Kelvin, f64::INFINITY), "inf°K");
    }

    #[test]
    fn test_windspeed_descriptor() {
        assert_eq!(windspeed_descriptor(DistanceVelocityUnit::Imperial, 1.609344), "1.00 mph");
        assert_eq!(windspeed_descriptor(DistanceVelocityUnit::Metric, 12.5), "12.50 km/h");
        assert_eq!(windspeed_descriptor(DistanceVelocityUnit::Metric, 0.0), "0.00 km/h");
    }

    #[test]
    fn test_distance_descriptor() {
        assert_eq!(distance_descriptor(DistanceVelocityUnit::Imperial, 1609.344), "1.00 mi");
        assert_eq!(distance_descriptor(DistanceVelocityUnit::Metric, 1000.0), "1.00 km");
        assert_eq!(distance_descriptor(DistanceVelocityUnit::Metric, 12_500.0), "12.50 km");
    }

    #[test]
    fn test_wind_direction_descriptor() {
        assert_eq!(wind_direction_descriptor(270.0), "270.00°");
        assert_eq!(wind_direction_descriptor(12.346), "12.35°");
    }

    #[test]
    fn test_descriptors_are_stable() {
        let unit = DistanceVelocityUnit::Imperial;
        assert_eq!(distance_descriptor(unit, 4321.0), distance_descriptor(unit, 4321.0));
        assert_eq!(windspeed_descriptor(unit, 33.3), windspeed_descriptor(unit, 33.3));
        assert_eq!(
            temperature_descriptor(TemperatureUnit::Fahrenheit, 280.0),
            temperature_descriptor(TemperatureUnit::Fahrenheit, 280.0)
        );
    }

    #[test]
    fn test_symbol_passthrough() {
        assert_eq!(weather_condition_symbol(800), Symbol::Clear);
        assert_eq!(weather_condition_symbol(201), Symbol::ThunderstormWithRain);
        assert_eq!(weather_condition_symbol(-1), Symbol::Unknown);
    }
}
