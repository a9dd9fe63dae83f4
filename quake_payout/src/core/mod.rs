//! Core domain types shared by the distance, payout and burning-cost stages.

pub mod domain;

pub use domain::{Event, GeoPoint, MeasuredEvent, PayoutSchedule, PayoutTier, YearlyPayouts};
