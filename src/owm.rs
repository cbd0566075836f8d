use std::fs;
use std::path::Path;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::daytime::{DaytimeWindow, GeoCoordinates};
use crate::error::{Error, Result};
use crate::units::speed;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Current weather for one location, as returned by OpenWeatherMap's
/// `/weather` endpoint in standard units (Kelvin, m/s).
#[derive(Deserialize, Debug, Clone)]
pub struct WeatherInformation {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub name: String,

    pub coord: Coord,

    #[serde(default)]
    pub weather: Vec<Condition>,

    pub main: Atmosphere,

    #[serde(default)]
    pub wind: Wind,

    #[serde(default)]
    pub clouds: Clouds,

    #[serde(default)]
    pub sys: Sys,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Condition {
    pub id: i32,

    #[serde(default)]
    pub main: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Atmosphere {
    /// Kelvin.
    pub temp: f64,

    pub humidity: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct Wind {
    /// Metres per second.
    #[serde(default)]
    pub speed: f64,

    pub deg: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct Clouds {
    pub all: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct Sys {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

impl WeatherInformation {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        Self::from_json(&text)
    }

    pub fn from_coordinates(lat: f64, lon: f64, api_key: Option<&str>) -> Result<Self> {
        Self::fetch(BASE_URL, lat, lon, api_key)
    }

    fn fetch(base_url: &str, lat: f64, lon: f64, api_key: Option<&str>) -> Result<Self> {
        let api_key =
            api_key.ok_or_else(|| Error::Config("no OpenWeatherMap API key configured".into()))?;
        tracing::info!(lat, lon, "fetching current weather");
        let query = [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", api_key.to_string()),
        ];
        // the key travels in the query string, so errors must not carry the URL
        let response = get_web_json(&format!("{base_url}/weather"), &query)
            .and_then(Response::error_for_status)
            .map_err(reqwest::Error::without_url)?;
        Ok(response.json().map_err(reqwest::Error::without_url)?)
    }

    pub fn coordinates(&self) -> GeoCoordinates {
        GeoCoordinates::new(self.coord.lat, self.coord.lon)
    }

    pub fn daytime_window(&self) -> DaytimeWindow {
        DaytimeWindow {
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        }
    }

    pub fn condition_code(&self) -> Option<i32> {
        self.weather.first().map(|c| c.id)
    }

    pub fn temperature_kelvin(&self) -> f64 {
        self.main.temp
    }

    pub fn windspeed_kph(&self) -> f64 {
        speed::mps2kph(self.wind.speed)
    }
}

fn get_web_json(url: &str, query: &[(&str, String)]) -> std::result::Result<Response, reqwest::Error> {
    let client = Client::builder().user_agent("nearby-wx").build()?;
    client.get(url).query(query).send()
}
