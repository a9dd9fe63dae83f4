use std::collections::HashSet;

use log::debug;

use crate::core::Event;

/// Drop events whose catalog id was already seen, keeping the first occurrence.
///
/// Events without an id are always kept.
pub fn dedupe_by_id(events: Vec<Event>) -> Vec<Event> {
    let before = events.len();
    let mut seen: HashSet<String> = HashSet::new();

    let unique: Vec<Event> = events
        .into_iter()
        .filter(|event| match &event.id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .collect();

    if unique.len() < before {
        debug!("Dropped {} duplicate event(s)", before - unique.len());
    }
    unique
}

/// Concatenate the results of several catalog queries and drop duplicates.
///
/// Queries around neighbouring locations overlap, so the same catalog event
/// can come back more than once.
pub fn merge_event_sets<I>(sets: I) -> Vec<Event>
where
    I: IntoIterator<Item = Vec<Event>>,
{
    let merged: Vec<Event> = sets.into_iter().flatten().collect();
    dedupe_by_id(merged)
}
