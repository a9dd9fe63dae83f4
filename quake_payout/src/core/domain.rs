//! Domain models for earthquake events and parametric payout schedules.
//!
//! This module provides the core data structures that flow through the payout
//! engine: catalog events, their distance to an insured location, the tiered
//! payout schedule and the per-year payout series derived from them.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use log::warn;
use qtty::{Degrees, Kilometers};
use serde::{Deserialize, Serialize};

/// A position on the Earth's surface in geographic degrees.
///
/// # Examples
///
/// ```
/// use quake_payout::core::GeoPoint;
///
/// let heraklion = GeoPoint::new(35.34, 25.13);
/// assert_eq!(heraklion.latitude.value(), 35.34);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        }
    }
}

/// A single earthquake record as handed over by the catalog.
///
/// Events carry no identity beyond their fields; the optional catalog `id` is
/// only used to drop duplicates when the results of several queries are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub time: DateTime<Utc>,
    pub magnitude: f64,
    pub epicenter: GeoPoint,
}

impl Event {
    pub fn new(time: DateTime<Utc>, magnitude: f64, epicenter: GeoPoint) -> Self {
        Self {
            id: None,
            time,
            magnitude,
            epicenter,
        }
    }

    /// Attaches the catalog identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Calendar year of the event in UTC.
    pub fn year(&self) -> i32 {
        self.time.year()
    }
}

/// An event together with its distance to one fixed reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredEvent {
    pub event: Event,
    pub distance: Kilometers,
}

impl MeasuredEvent {
    pub fn new(event: Event, distance: Kilometers) -> Self {
        Self { event, distance }
    }

    pub fn magnitude(&self) -> f64 {
        self.event.magnitude
    }

    pub fn year(&self) -> i32 {
        self.event.year()
    }
}

/// One rule of a payout schedule.
///
/// A tier fires for an event when the event is at least as strong as
/// `magnitude_threshold` and no further away than `radius_threshold`.
///
/// # Examples
///
/// ```
/// use quake_payout::core::PayoutTier;
/// use qtty::Kilometers;
///
/// let tier = PayoutTier::new(5.5, 50.0, 75.0);
/// assert!(tier.fires(6.0, Kilometers::new(50.0)));
/// assert!(!tier.fires(5.0, Kilometers::new(10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutTier {
    pub magnitude_threshold: f64,
    pub radius_threshold: Kilometers,
    pub payout_amount: f64,
}

impl PayoutTier {
    /// Creates a tier from a magnitude threshold, a radius in kilometers and a payout.
    pub fn new(magnitude_threshold: f64, radius_km: f64, payout_amount: f64) -> Self {
        Self {
            magnitude_threshold,
            radius_threshold: Kilometers::new(radius_km),
            payout_amount,
        }
    }

    /// Whether this tier triggers for an event of the given magnitude and distance.
    pub fn fires(&self, magnitude: f64, distance: Kilometers) -> bool {
        magnitude >= self.magnitude_threshold && distance <= self.radius_threshold
    }
}

/// A collection of payout tiers.
///
/// Tier order carries no meaning: every tier is evaluated for every event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoutSchedule {
    tiers: Vec<PayoutTier>,
}

impl PayoutSchedule {
    pub fn new(tiers: Vec<PayoutTier>) -> Self {
        Self { tiers }
    }

    /// Builds a schedule from three parallel columns, the layout used by the
    /// historical payout-structure tables.
    ///
    /// Columns of unequal length are truncated to the shortest one.
    ///
    /// # Examples
    ///
    /// ```
    /// use quake_payout::core::PayoutSchedule;
    ///
    /// let schedule = PayoutSchedule::from_columns(
    ///     &[10.0, 50.0, 200.0],
    ///     &[4.5, 5.5, 6.5],
    ///     &[100.0, 75.0, 50.0],
    /// );
    /// assert_eq!(schedule.len(), 3);
    /// ```
    pub fn from_columns(radii_km: &[f64], magnitudes: &[f64], payouts: &[f64]) -> Self {
        let rows = radii_km.len().min(magnitudes.len()).min(payouts.len());
        if rows != radii_km.len() || rows != magnitudes.len() || rows != payouts.len() {
            warn!(
                "Payout structure columns differ in length ({} radii, {} magnitudes, {} payouts); using {} tier(s)",
                radii_km.len(),
                magnitudes.len(),
                payouts.len(),
                rows
            );
        }

        radii_km
            .iter()
            .zip(magnitudes)
            .zip(payouts)
            .map(|((&radius, &magnitude), &payout)| PayoutTier::new(magnitude, radius, payout))
            .collect()
    }

    pub fn tiers(&self) -> &[PayoutTier] {
        &self.tiers
    }

    pub fn push(&mut self, tier: PayoutTier) {
        self.tiers.push(tier);
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl FromIterator<PayoutTier> for PayoutSchedule {
    fn from_iter<I: IntoIterator<Item = PayoutTier>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Payout per calendar year.
///
/// Years missing from the series are read as a zero payout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearlyPayouts {
    by_year: BTreeMap<i32, f64>,
}

impl YearlyPayouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a payout for `year`, keeping the largest amount seen so far.
    ///
    /// A year recorded with a zero payout stays present in the series.
    pub fn record(&mut self, year: i32, payout: f64) {
        let entry = self.by_year.entry(year).or_insert(0.0);
        if payout > *entry {
            *entry = payout;
        }
    }

    /// Payout for `year`, zero when the year is absent.
    pub fn get(&self, year: i32) -> f64 {
        self.by_year.get(&year).copied().unwrap_or(0.0)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.by_year.contains_key(&year)
    }

    /// Sum of payouts for years in `first..=last`.
    pub fn sum_between(&self, first: i32, last: i32) -> f64 {
        if first > last {
            return 0.0;
        }
        self.by_year.range(first..=last).map(|(_, payout)| payout).sum()
    }

    /// Iterates `(year, payout)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.by_year.iter().map(|(&year, &payout)| (year, payout))
    }

    /// Payouts in ascending year order.
    pub fn values(&self) -> Vec<f64> {
        self.by_year.values().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}

impl FromIterator<(i32, f64)> for YearlyPayouts {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        let mut payouts = YearlyPayouts::new();
        for (year, payout) in iter {
            payouts.record(year, payout);
        }
        payouts
    }
}

impl From<BTreeMap<i32, f64>> for YearlyPayouts {
    fn from(by_year: BTreeMap<i32, f64>) -> Self {
        Self { by_year }
    }
}
