//! Payout computation algorithms.
//!
//! This module holds the three stages of the pricing pipeline, leaf first.
//!
//! # Components
//!
//! - [`distance`]: Great-circle (haversine) distance from a reference point
//! - [`payouts`]: Tiered schedule evaluation reduced to one payout per year
//! - [`burning_cost`]: Windowed average of the yearly payout series
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use quake_payout::algorithms::{compute_burning_cost, compute_yearly_payouts, measure_events, EARTH_RADIUS};
//! use quake_payout::core::{Event, GeoPoint, PayoutSchedule};
//!
//! let site = GeoPoint::new(35.0, 25.0);
//! let events = vec![Event::new(
//!     Utc.with_ymd_and_hms(2020, 9, 28, 4, 48, 8).unwrap(),
//!     6.0,
//!     GeoPoint::new(35.0817, 25.2018),
//! )];
//! let schedule = PayoutSchedule::from_columns(&[10.0, 50.0, 200.0], &[4.5, 5.5, 6.5], &[100.0, 75.0, 50.0]);
//!
//! let measured = measure_events(&site, events, EARTH_RADIUS);
//! let yearly = compute_yearly_payouts(&measured, &schedule);
//! assert_eq!(yearly.get(2020), 75.0);
//!
//! let cost = compute_burning_cost(&yearly, 2016, 2020);
//! assert_eq!(cost, 15.0);
//! ```

pub mod burning_cost;
pub mod distance;
pub mod payouts;

pub use burning_cost::{burning_cost_over, compute_burning_cost, WindowBounds, YearWindow};
pub use distance::{
    distances, haversine_distance, haversine_distance_closed_form, measure_events, EARTH_RADIUS,
};
pub use payouts::{compute_yearly_payouts, event_payout};
