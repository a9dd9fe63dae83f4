//! Adapters between the tabular event contract and the typed domain.
//!
//! The acquisition layer hands over polars `DataFrame`s laid out like the
//! catalog's CSV export (`time`, `mag`, `latitude`, `longitude`, optional
//! `id`). This module validates that layout and converts it.
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use quake_payout::config::ColumnNames;
//! use quake_payout::core::GeoPoint;
//! use quake_payout::parsing::{events_from_frame, with_distance_column};
//! use quake_payout::algorithms::EARTH_RADIUS;
//!
//! let df = df!(
//!     "time" => ["2021-10-12T09:24:05.099Z"],
//!     "mag" => [6.0],
//!     "latitude" => [35.1691],
//!     "longitude" => [26.2152]
//! ).unwrap();
//!
//! let columns = ColumnNames::default();
//! let with_distance = with_distance_column(&df, &GeoPoint::new(35.0, 25.0), &columns, EARTH_RADIUS).unwrap();
//! assert!(with_distance.column("distance").is_ok());
//!
//! let events = events_from_frame(&df, &columns).unwrap();
//! assert_eq!(events.len(), 1);
//! ```

pub mod frame;


pub use frame::{
    events_from_frame, measured_events_from_frame, schedule_from_frame, with_distance_column,
    yearly_payouts_from_frame,
};
