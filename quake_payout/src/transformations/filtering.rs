use chrono::{DateTime, Utc};
use qtty::Kilometers;

use crate::core::{Event, MeasuredEvent};

/// Keep events that happened at or before `cutoff`.
pub fn filter_until(events: &[Event], cutoff: DateTime<Utc>) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.time <= cutoff)
        .cloned()
        .collect()
}

/// Keep events with magnitude at least `min_magnitude`
pub fn filter_by_min_magnitude(events: &[Event], min_magnitude: f64) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.magnitude >= min_magnitude)
        .cloned()
        .collect()
}

/// Keep events no further than `radius` from the reference point they were measured against
pub fn filter_within_radius(events: &[MeasuredEvent], radius: Kilometers) -> Vec<MeasuredEvent> {
    events
        .iter()
        .filter(|event| event.distance <= radius)
        .cloned()
        .collect()
}
