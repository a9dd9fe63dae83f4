//! Payout schedule evaluation.
//!
//! Every tier is evaluated independently for every event and the firing tiers
//! are reduced by maximum. Within a calendar year the event payouts are again
//! reduced by maximum: a policy pays at most once per year.

use log::debug;
use qtty::Kilometers;

use crate::core::{MeasuredEvent, PayoutSchedule, YearlyPayouts};

/// Payout for a single event: the largest amount among all firing tiers, zero
/// when none fires.
///
/// # Examples
///
/// ```
/// use quake_payout::algorithms::event_payout;
/// use quake_payout::core::{PayoutSchedule, PayoutTier};
/// use qtty::Kilometers;
///
/// // The stricter tier is listed last and still wins.
/// let schedule = PayoutSchedule::new(vec![
///     PayoutTier::new(5.5, 50.0, 75.0),
///     PayoutTier::new(4.5, 10.0, 100.0),
/// ]);
/// assert_eq!(event_payout(&schedule, 6.0, Kilometers::new(1.0)), 100.0);
/// ```
pub fn event_payout(schedule: &PayoutSchedule, magnitude: f64, distance: Kilometers) -> f64 {
    schedule
        .tiers()
        .iter()
        .filter(|tier| tier.fires(magnitude, distance))
        .map(|tier| tier.payout_amount)
        .fold(0.0, f64::max)
}

/// Reduces distance-augmented events to one payout per calendar year.
///
/// Every year that has at least one event gets an entry, zero when no event of
/// that year triggers a tier. Years without events are absent.
pub fn compute_yearly_payouts(events: &[MeasuredEvent], schedule: &PayoutSchedule) -> YearlyPayouts {
    let mut yearly = YearlyPayouts::new();
    for event in events {
        yearly.record(event.year(), event_payout(schedule, event.magnitude(), event.distance));
    }

    debug!(
        "Evaluated {} event(s) against {} tier(s): {} year(s) present",
        events.len(),
        schedule.len(),
        yearly.len()
    );
    yearly
}
