//! Event timestamp handling.

pub mod timestamps;

#[cfg(test)]
mod timestamps_tests;

pub use timestamps::{cutoff_instant, historical_cutoff, parse_event_time, HISTORICAL_CUTOFF};
