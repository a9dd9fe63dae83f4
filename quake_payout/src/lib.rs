//! Parametric earthquake payout engine.
//!
//! Prices earthquake cover for insured locations from historical catalog
//! events: great-circle distance from each epicenter, a tiered payout schedule
//! evaluated per event and reduced per year, and the burning cost averaged
//! over a window of years.
//!
//! Fetching events from the catalog is left to the caller, which hands the
//! engine a polars `DataFrame` or typed [`Event`](crate::core::Event) values.

pub mod algorithms;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod services;
pub mod time;
pub mod transformations;

pub use algorithms::{
    compute_burning_cost, compute_yearly_payouts, distances, haversine_distance, YearWindow,
    EARTH_RADIUS,
};
pub use config::{ColumnNames, PricingConfig};
pub use error::{PayoutError, PayoutResult};
