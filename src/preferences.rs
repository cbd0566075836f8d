use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::events::{EventBus, Subscription};
use crate::units::{DistanceVelocityUnit, TemperatureUnit};

/// User preferences, read from a JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub temperature_unit: TemperatureUnit,
    pub distance_unit: DistanceVelocityUnit,
    pub show_temperature_on_icon: bool,
    /// City name of the bookmark whose temperature drives the badge.
    pub preferred_bookmark: Option<String>,
    pub api_key: Option<String>,
}

impl Preferences {
    /// Loads preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(Error::io(path, err)),
        };
        let prefs: Self = serde_json::from_str(&text)?;
        tracing::debug!("loaded preferences from {}", path.display());
        Ok(prefs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    TemperatureUnit(TemperatureUnit),
    DistanceUnit(DistanceVelocityUnit),
    ShowTemperatureOnIcon(bool),
}

/// Holds the active preferences and pushes every change to subscribers.
pub struct PreferencesService {
    current: Mutex<Preferences>,
    changes: EventBus<PreferenceChange>,
}

impl PreferencesService {
    pub fn new(initial: Preferences) -> Self {
        Self {
            current: Mutex::new(initial),
            changes: EventBus::new(),
        }
    }

    pub fn current(&self) -> Preferences {
        self.current.lock().clone()
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.current.lock().temperature_unit
    }

    pub fn distance_unit(&self) -> DistanceVelocityUnit {
        self.current.lock().distance_unit
    }

    pub fn subscribe(&self) -> Subscription<PreferenceChange> {
        self.changes.subscribe()
    }

    pub fn unsubscribe(&self, subscription: Subscription<PreferenceChange>) {
        self.changes.unsubscribe(subscription);
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.subscriber_count()
    }

    pub fn set_temperature_unit(&self, unit: TemperatureUnit) {
        self.update(PreferenceChange::TemperatureUnit(unit), |p| {
            std::mem::replace(&mut p.temperature_unit, unit) != unit
        });
    }

    pub fn set_distance_unit(&self, unit: DistanceVelocityUnit) {
        self.update(PreferenceChange::DistanceUnit(unit), |p| {
            std::mem::replace(&mut p.distance_unit, unit) != unit
        });
    }

    pub fn set_show_temperature_on_icon(&self, enabled: bool) {
        self.update(PreferenceChange::ShowTemperatureOnIcon(enabled), |p| {
            std::mem::replace(&mut p.show_temperature_on_icon, enabled) != enabled
        });
    }

    fn update(&self, change: PreferenceChange, apply: impl FnOnce(&mut Preferences) -> bool) {
        let changed = apply(&mut *self.current.lock());
        if changed {
            tracing::debug!(?change, "preference changed");
            self.changes.publish(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(prefs.distance_unit, DistanceVelocityUnit::Metric);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"temperature_unit": "kelvin", "show_temperature_on_icon": true}}"#
        )
        .unwrap();
        let prefs = Preferences::load(file.path()).unwrap();
        assert_eq!(prefs.temperature_unit, TemperatureUnit::Kelvin);
        assert_eq!(prefs.distance_unit, DistanceVelocityUnit::Metric);
        assert!(prefs.show_temperature_on_icon);
        assert_eq!(prefs.api_key, None);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(Preferences::load(file.path()), Err(Error::Json(_))));
    }

    #[test]
    fn test_changes_are_pushed_once() {
        let service = PreferencesService::new(Preferences::default());
        let sub = service.subscribe();

        service.set_temperature_unit(TemperatureUnit::Fahrenheit);
        service.set_temperature_unit(TemperatureUnit::Fahrenheit);
        service.set_distance_unit(DistanceVelocityUnit::Imperial);
        service.set_show_temperature_on_icon(false);

        let events: Vec<_> = sub.drain().collect();
        assert_eq!(
            events,
            vec![
                PreferenceChange::TemperatureUnit(TemperatureUnit::Fahrenheit),
                PreferenceChange::DistanceUnit(DistanceVelocityUnit::Imperial),
            ]
        );
        assert_eq!(service.temperature_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(service.distance_unit(), DistanceVelocityUnit::Imperial);
    }

    #[test]
    fn test_unsubscribed_consumer_gets_nothing() {
        let service = PreferencesService::new(Preferences::default());
        let sub = service.subscribe();
        let other = service.subscribe();
        service.unsubscribe(sub);
        service.set_show_temperature_on_icon(true);
        assert_eq!(other.latest(), Some(PreferenceChange::ShowTemperatureOnIcon(true)));
        assert!(service.current().show_temperature_on_icon);
    }
}
