use serde::{Deserialize, Serialize};

/// Display unit for temperatures. Raw temperatures are always Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "°K",
        }
    }

    /// Next unit in display order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Kelvin,
            Self::Kelvin => Self::Celsius,
        }
    }
}

/// Display unit for distances and velocities. Metres and km/h are canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistanceVelocityUnit {
    #[default]
    Metric,
    Imperial,
}

impl DistanceVelocityUnit {
    pub fn speed_label(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    pub fn distance_label(self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

pub mod temperature {
    use super::TemperatureUnit;

    const KELVIN_OFFSET: f64 = 273.15;
    const RANKINE_OFFSET: f64 = 459.67;

    pub fn k2c(temp_k: f64) -> f64 {
        temp_k - KELVIN_OFFSET
    }

    pub fn k2f(temp_k: f64) -> f64 {
        temp_k * (9.0 / 5.0) - RANKINE_OFFSET
    }

    pub fn from_kelvin(unit: TemperatureUnit, temp_k: f64) -> f64 {
        match unit {
            TemperatureUnit::Celsius => k2c(temp_k),
            TemperatureUnit::Fahrenheit => k2f(temp_k),
            TemperatureUnit::Kelvin => temp_k,
        }
    }

    #[test]
    fn test_temperature() {
        assert!((k2c(273.15) - 0.0).abs() < 1e-9);
        assert!((k2c(373.15) - 100.0).abs() < 1e-9);
        assert!((k2f(273.15) - 32.0).abs() < 1e-9);
        assert!((k2f(0.0) + 459.67).abs() < 1e-9);
        assert_eq!(from_kelvin(TemperatureUnit::Kelvin, 12.5), 12.5);
    }
}

pub mod speed {
    use super::DistanceVelocityUnit;

    pub const KM_PER_MILE: f64 = 1.609344;

    pub fn kph2mph(kph: f64) -> f64 {
        kph / KM_PER_MILE
    }

    /// OpenWeatherMap reports wind in m/s.
    pub fn mps2kph(mps: f64) -> f64 {
        mps * 3.6
    }

    pub fn from_kph(unit: DistanceVelocityUnit, kph: f64) -> f64 {
        match unit {
            DistanceVelocityUnit::Metric => kph,
            DistanceVelocityUnit::Imperial => kph2mph(kph),
        }
    }

    #[test]
    fn test_speed() {
        assert!((kph2mph(KM_PER_MILE) - 1.0).abs() < 1e-12);
        assert!((mps2kph(10.0) - 36.0).abs() < 1e-12);
        assert_eq!(from_kph(DistanceVelocityUnit::Metric, 42.0), 42.0);
    }
}

pub mod distance {
    use super::DistanceVelocityUnit;

    pub const METRES_PER_KM: f64 = 1000.0;
    pub const METRES_PER_MILE: f64 = 1609.344;

    pub fn from_metres(unit: DistanceVelocityUnit, metres: f64) -> f64 {
        match unit {
            DistanceVelocityUnit::Metric => metres / METRES_PER_KM,
            DistanceVelocityUnit::Imperial => metres / METRES_PER_MILE,
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(from_metres(DistanceVelocityUnit::Metric, 2500.0), 2.5);
        assert!((from_metres(DistanceVelocityUnit::Imperial, METRES_PER_MILE) - 1.0).abs() < 1e-12);
    }
}
