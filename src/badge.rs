//! App-icon badge showing the preferred location's temperature.

use crate::conversion::temperature_value;
use crate::owm::WeatherInformation;
use crate::units::TemperatureUnit;

pub const SIGN_CHANGE_TITLE: &str = "Temperature sign changed";

/// Where badge counts and notifications end up. Implemented by the host.
pub trait BadgeSink {
    fn set_badge_count(&mut self, count: u32);
    fn notify(&mut self, title: &str, body: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureSign {
    Plus,
    Minus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignChange {
    pub sign: TemperatureSign,
    pub city: String,
}

impl SignChange {
    pub fn body(&self) -> String {
        match self.sign {
            TemperatureSign::Plus => format!("Temperature in {} is now above zero", self.city),
            TemperatureSign::Minus => format!("Temperature in {} is now below zero", self.city),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeOutcome {
    Cleared,
    /// The temperature had no displayable value; the badge was left alone.
    Unchanged,
    Updated {
        count: u32,
        change: Option<SignChange>,
    },
}

/// Crossing zero in either direction. Touching zero is not a crossing.
pub fn sign_change(last: i64, temperature: i64) -> Option<TemperatureSign> {
    if last < 0 && temperature > 0 {
        Some(TemperatureSign::Plus)
    } else if last > 0 && temperature < 0 {
        Some(TemperatureSign::Minus)
    } else {
        None
    }
}

pub struct BadgeService<S> {
    sink: S,
    last_temperature: i64,
}

impl<S: BadgeSink> BadgeService<S> {
    pub fn new(sink: S) -> Self {
        Self::with_last_temperature(sink, 0)
    }

    /// Starts from a previously shown signed temperature. Badge counts are
    /// unsigned, so the sign has to be remembered here.
    pub fn with_last_temperature(sink: S, last_temperature: i64) -> Self {
        Self {
            sink,
            last_temperature,
        }
    }

    pub fn last_temperature(&self) -> i64 {
        self.last_temperature
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn update(
        &mut self,
        enabled: bool,
        permission_granted: bool,
        preferred: Option<&WeatherInformation>,
        unit: TemperatureUnit,
    ) -> BadgeOutcome {
        if !enabled || !permission_granted {
            tracing::debug!(enabled, permission_granted, "badge disabled");
            self.clear();
            return BadgeOutcome::Cleared;
        }
        let Some(info) = preferred else {
            tracing::debug!("no preferred bookmark data, clearing badge");
            self.clear();
            return BadgeOutcome::Cleared;
        };
        let Some(temperature) = temperature_value(unit, info.temperature_kelvin()) else {
            tracing::warn!(city = %info.name, "temperature not displayable, badge unchanged");
            return BadgeOutcome::Unchanged;
        };

        let count = u32::try_from(temperature.unsigned_abs()).unwrap_or(u32::MAX);
        self.sink.set_badge_count(count);

        let change = sign_change(self.last_temperature, temperature).map(|sign| SignChange {
            sign,
            city: info.name.clone(),
        });
        if let Some(change) = &change {
            tracing::info!(city = %change.city, sign = ?change.sign, "temperature sign changed");
            self.sink.notify(SIGN_CHANGE_TITLE, &change.body());
        }
        self.last_temperature = temperature;

        BadgeOutcome::Updated { count, change }
    }

    pub fn clear(&mut self) {
        self.sink.set_badge_count(0);
        self.last_temperature = 0;
    }
}
