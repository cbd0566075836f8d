//! Day/night classification from sunrise and sunset in a location's local time.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Sunrise and sunset as Unix timestamps (seconds). Either may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaytimeWindow {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Resolves the timezone a coordinate pair lies in.
pub trait TimezoneResolver {
    fn resolve(&self, coordinates: &GeoCoordinates) -> Option<Tz>;
}

/// Timezone lookup against the bundled timezone boundary polygons.
pub struct TzfResolver {
    finder: DefaultFinder,
}

impl TzfResolver {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver for TzfResolver {
    fn resolve(&self, coordinates: &GeoCoordinates) -> Option<Tz> {
        let name = self
            .finder
            .get_tz_name(coordinates.longitude, coordinates.latitude);
        name.parse::<Tz>().ok()
    }
}

/// Always answers with the same zone. Useful when the caller already knows it.
#[derive(Debug, Clone, Copy)]
pub struct FixedResolver(pub Tz);

impl TimezoneResolver for FixedResolver {
    fn resolve(&self, _coordinates: &GeoCoordinates) -> Option<Tz> {
        Some(self.0)
    }
}

/// Whether it is currently day at `coordinates`.
pub fn is_day_time<R: TimezoneResolver + ?Sized>(
    resolver: &R,
    coordinates: &GeoCoordinates,
    window: Option<&DaytimeWindow>,
) -> Option<bool> {
    is_day_time_at(resolver, coordinates, window, Utc::now())
}

/// Whether `now` falls between sunrise and sunset at `coordinates`.
///
/// Times are compared as local hour and minute; seconds are dropped. Both
/// ends are inclusive. When sunset falls before sunrise on the local clock
/// the window wraps past midnight.
pub fn is_day_time_at<R: TimezoneResolver + ?Sized>(
    resolver: &R,
    coordinates: &GeoCoordinates,
    window: Option<&DaytimeWindow>,
    now: DateTime<Utc>,
) -> Option<bool> {
    let window = window?;
    let (sunrise, sunset) = (window.sunrise?, window.sunset?);
    let tz = resolver.resolve(coordinates)?;

    let now = minute_of_day(&tz, now.timestamp())?;
    let sunrise = minute_of_day(&tz, sunrise)?;
    let sunset = minute_of_day(&tz, sunset)?;

    if sunset < sunrise {
        Some(now >= sunrise || now <= sunset)
    } else {
        Some(now >= sunrise && now <= sunset)
    }
}

fn minute_of_day(tz: &Tz, timestamp: i64) -> Option<u32> {
    let local = DateTime::from_timestamp(timestamp, 0)?.with_timezone(tz);
    Some(local.hour() * 60 + local.minute())
}
