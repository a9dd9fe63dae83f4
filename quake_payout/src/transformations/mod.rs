//! Event preparation ahead of payout evaluation.
//!
//! This module provides the cleaning and filtering steps applied to catalog
//! events before they are priced: duplicate removal after merging several
//! catalog queries, the historical cutoff, and local magnitude/radius filters.
//!
//! # Modules
//!
//! - [`cleaning`]: Merge event sets and drop duplicate catalog ids
//! - [`filtering`]: Filter events by time, magnitude or distance
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use quake_payout::core::{Event, GeoPoint};
//! use quake_payout::transformations::{dedupe_by_id, filter_until};
//!
//! let t = Utc.with_ymd_and_hms(2021, 11, 1, 0, 0, 0).unwrap();
//! let events = vec![
//!     Event::new(t, 5.0, GeoPoint::new(35.0, 25.0)).with_id("a"),
//!     Event::new(t, 5.0, GeoPoint::new(35.0, 25.0)).with_id("a"),
//! ];
//!
//! let unique = dedupe_by_id(events);
//! assert_eq!(unique.len(), 1);
//!
//! let cutoff = Utc.with_ymd_and_hms(2021, 10, 21, 0, 0, 0).unwrap();
//! assert!(filter_until(&unique, cutoff).is_empty());
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{dedupe_by_id, merge_event_sets};
pub use filtering::{filter_by_min_magnitude, filter_until, filter_within_radius};
