//! Pricing configuration file support.
//!
//! This module reads the pricing model settings (earth radius, catalog cutoff,
//! averaging window, payout schedule and event-table column names) from TOML.
//!
//! ```toml
//! [model]
//! earth_radius_km = 6378.0
//! historical_cutoff = "2021-10-21"
//!
//! [window]
//! start_year = 1952
//! end_year = 2021
//! bounds = "inclusive"
//!
//! [[schedule]]
//! magnitude_threshold = 4.5
//! radius_threshold = 10.0
//! payout_amount = 100.0
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use qtty::Kilometers;
use serde::{Deserialize, Serialize};

use crate::algorithms::{WindowBounds, YearWindow};
use crate::core::PayoutSchedule;
use crate::error::{PayoutError, PayoutResult};
use crate::time::{cutoff_instant, historical_cutoff};

/// Full pricing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default)]
    pub schedule: PayoutSchedule,
}

/// Physical model constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_earth_radius_km")]
    pub earth_radius_km: f64,
    #[serde(default = "historical_cutoff")]
    pub historical_cutoff: NaiveDate,
}

/// Averaging window for the burning cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    #[serde(default)]
    pub bounds: WindowBounds,
}

/// Column names of the event table handed over by the acquisition layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNames {
    #[serde(default = "default_time_column")]
    pub time: String,
    #[serde(default = "default_magnitude_column")]
    pub magnitude: String,
    #[serde(default = "default_latitude_column")]
    pub latitude: String,
    #[serde(default = "default_longitude_column")]
    pub longitude: String,
    #[serde(default = "default_distance_column")]
    pub distance: String,
    #[serde(default = "default_id_column")]
    pub id: String,
    #[serde(default = "default_payout_column")]
    pub payout: String,
}

fn default_earth_radius_km() -> f64 {
    crate::algorithms::EARTH_RADIUS.value()
}

fn default_start_year() -> i32 {
    // First year requested from the catalog.
    1823
}

fn default_end_year() -> i32 {
    historical_cutoff().year()
}

fn default_time_column() -> String {
    "time".to_string()
}

fn default_magnitude_column() -> String {
    "mag".to_string()
}

fn default_latitude_column() -> String {
    "latitude".to_string()
}

fn default_longitude_column() -> String {
    "longitude".to_string()
}

fn default_distance_column() -> String {
    "distance".to_string()
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_payout_column() -> String {
    "payout".to_string()
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            earth_radius_km: default_earth_radius_km(),
            historical_cutoff: historical_cutoff(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
            bounds: WindowBounds::default(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            time: default_time_column(),
            magnitude: default_magnitude_column(),
            latitude: default_latitude_column(),
            longitude: default_longitude_column(),
            distance: default_distance_column(),
            id: default_id_column(),
            payout: default_payout_column(),
        }
    }
}

impl PricingConfig {
    /// Load pricing configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(PricingConfig)` if the file is readable, parses and validates
    /// * `Err(PayoutError::ConfigurationError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> PayoutResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            PayoutError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        content.parse()
    }

    /// Check the settings for values the model cannot work with.
    ///
    /// An inverted window is accepted: it simply prices to zero.
    pub fn validate(&self) -> PayoutResult<()> {
        let mut issues: Vec<String> = Vec::new();

        if !(self.model.earth_radius_km.is_finite() && self.model.earth_radius_km > 0.0) {
            issues.push(format!(
                "earth_radius_km must be positive, got {}",
                self.model.earth_radius_km
            ));
        }

        for (index, tier) in self.schedule.tiers().iter().enumerate() {
            if tier.radius_threshold.value() < 0.0 {
                issues.push(format!("tier {} has a negative radius_threshold", index));
            }
            if tier.payout_amount < 0.0 {
                issues.push(format!("tier {} has a negative payout_amount", index));
            }
            if tier.magnitude_threshold.is_nan() {
                issues.push(format!("tier {} has no magnitude_threshold", index));
            }
        }

        let columns = [
            &self.columns.time,
            &self.columns.magnitude,
            &self.columns.latitude,
            &self.columns.longitude,
            &self.columns.distance,
        ];
        if columns.iter().any(|name| name.trim().is_empty()) {
            issues.push("event column names must not be empty".to_string());
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(PayoutError::ConfigurationError(issues.join("; ")))
        }
    }

    pub fn earth_radius(&self) -> Kilometers {
        Kilometers::new(self.model.earth_radius_km)
    }

    /// Events strictly after this instant are ignored.
    pub fn cutoff(&self) -> DateTime<Utc> {
        cutoff_instant(self.model.historical_cutoff)
    }

    pub fn window(&self) -> YearWindow {
        YearWindow {
            start_year: self.window.start_year,
            end_year: self.window.end_year,
            bounds: self.window.bounds,
        }
    }
}

impl FromStr for PricingConfig {
    type Err = PayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: PricingConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
