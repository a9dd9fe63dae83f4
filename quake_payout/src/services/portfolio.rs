//! Portfolio pricing.
//!
//! Runs the full pipeline (cutoff, de-duplication, distance, payout schedule,
//! burning cost) for each insured location. Each location is priced on its own
//! so that one malformed event table never discards the quotes already
//! computed for the others.

use std::collections::BTreeMap;

use log::{info, warn};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::algorithms::{burning_cost_over, compute_yearly_payouts, measure_events};
use crate::config::PricingConfig;
use crate::core::{Event, GeoPoint, YearlyPayouts};
use crate::error::PayoutResult;
use crate::parsing::events_from_frame;
use crate::transformations::{dedupe_by_id, filter_until};

/// A named insured property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuredLocation {
    pub name: String,
    pub point: GeoPoint,
}

impl InsuredLocation {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            point: GeoPoint::new(latitude, longitude),
        }
    }
}

/// Pricing outcome for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQuote {
    pub location: InsuredLocation,
    pub events_considered: usize,
    pub yearly_payouts: YearlyPayouts,
    pub burning_cost: f64,
}

/// A location that could not be priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFailure {
    pub location: String,
    pub reason: String,
}

/// Burning cost per location plus the locations that failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub costs: BTreeMap<String, f64>,
    pub quotes: Vec<LocationQuote>,
    pub failures: Vec<LocationFailure>,
}

impl PortfolioReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> PayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Price a location from already decoded events.
pub fn price_events(location: &InsuredLocation, events: Vec<Event>, config: &PricingConfig) -> LocationQuote {
    let events = dedupe_by_id(filter_until(&events, config.cutoff()));
    let events_considered = events.len();

    let measured = measure_events(&location.point, events, config.earth_radius());
    let yearly_payouts = compute_yearly_payouts(&measured, &config.schedule);
    let burning_cost = burning_cost_over(&yearly_payouts, &config.window());

    LocationQuote {
        location: location.clone(),
        events_considered,
        yearly_payouts,
        burning_cost,
    }
}

/// Price a location from its event table.
///
/// # Errors
/// Returns an error when the table breaks the event-table contract (missing
/// columns, nulls, wrong types, unparseable timestamps).
pub fn price_location(
    location: &InsuredLocation,
    frame: &DataFrame,
    config: &PricingConfig,
) -> PayoutResult<LocationQuote> {
    let events = events_from_frame(frame, &config.columns)?;
    Ok(price_events(location, events, config))
}

/// Price every location, collecting failures instead of aborting.
///
/// Locations sharing a name overwrite each other's entry in `costs`; every
/// quote is still kept in `quotes`.
pub fn price_portfolio<'a, I>(entries: I, config: &PricingConfig) -> PortfolioReport
where
    I: IntoIterator<Item = (InsuredLocation, &'a DataFrame)>,
{
    let mut report = PortfolioReport::default();

    for (location, frame) in entries {
        match price_location(&location, frame, config) {
            Ok(quote) => {
                report.costs.insert(location.name.clone(), quote.burning_cost);
                report.quotes.push(quote);
            }
            Err(e) => {
                warn!("Skipping location '{}': {}", location.name, e);
                report.failures.push(LocationFailure {
                    location: location.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Priced {} location(s), {} failed",
        report.quotes.len(),
        report.failures.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PayoutSchedule;
    use chrono::{TimeZone, Utc};
    use polars::prelude::*;

    fn config() -> PricingConfig {
        let mut config = PricingConfig::default();
        config.schedule =
            PayoutSchedule::from_columns(&[10.0, 50.0, 200.0], &[4.5, 5.5, 6.5], &[100.0, 75.0, 50.0]);
        config.window.start_year = 2012;
        config.window.end_year = 2021;
        config
    }

    fn event(year: i32, magnitude: f64, latitude: f64, longitude: f64) -> Event {
        Event::new(
            Utc.with_ymd_and_hms(year, 5, 1, 0, 0, 0).unwrap(),
            magnitude,
            GeoPoint::new(latitude, longitude),
        )
    }

    #[test]
    fn test_price_events_applies_cutoff_and_dedupe() {
        let site = InsuredLocation::new("heraklion", 35.0, 25.0);
        let after_cutoff = Event::new(
            Utc.with_ymd_and_hms(2021, 12, 1, 0, 0, 0).unwrap(),
            9.0,
            GeoPoint::new(35.0, 25.0),
        );
        let events = vec![
            event(2015, 6.0, 35.0817, 25.2018).with_id("a"),
            event(2015, 6.0, 35.0817, 25.2018).with_id("a"),
            after_cutoff,
        ];

        let quote = price_events(&site, events, &config());
        assert_eq!(quote.events_considered, 1);
        assert_eq!(quote.yearly_payouts.get(2015), 75.0);
        assert_eq!(quote.yearly_payouts.get(2021), 0.0);
        // 75 over the ten years 2012..=2021
        assert_eq!(quote.burning_cost, 7.5);
    }

    #[test]
    fn test_price_portfolio_isolates_failures() {
        let good = df!(
            "time" => &["2016-01-26T03:03:00Z"],
            "mag" => &[5.6],
            "latitude" => &[35.2],
            "longitude" => &[25.1]
        )
        .unwrap();
        let bad = df!(
            "time" => &["2016-01-26T03:03:00Z"],
            "latitude" => &[35.2],
            "longitude" => &[25.1]
        )
        .unwrap();

        let entries = vec![
            (InsuredLocation::new("first", 35.0, 25.0), &good),
            (InsuredLocation::new("broken", 35.0, 25.0), &bad),
            (InsuredLocation::new("far", -33.4, -70.6), &good),
        ];

        let report = price_portfolio(entries, &config());
        assert!(!report.is_complete());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].location, "broken");
        assert!(report.failures[0].reason.contains("mag"));
        assert_eq!(report.costs.len(), 2);
        assert_eq!(report.costs["first"], 7.5);
        assert_eq!(report.costs["far"], 0.0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let site = InsuredLocation::new("heraklion", 35.0, 25.0);
        let quote = price_events(&site, vec![event(2020, 6.0, 35.0817, 25.2018)], &config());
        let mut report = PortfolioReport::default();
        report.costs.insert(site.name.clone(), quote.burning_cost);
        report.quotes.push(quote);

        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["costs"]["heraklion"], 7.5);
        assert_eq!(value["quotes"][0]["yearly_payouts"]["2020"], 75.0);
    }
}
