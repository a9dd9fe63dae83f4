//! Great-circle distance between an insured location and event epicenters.
//!
//! Distances use the haversine formula on a sphere of radius [`EARTH_RADIUS`]
//! unless the caller supplies another radius.

use qtty::{Kilometers, Radian};

use crate::core::{Event, GeoPoint, MeasuredEvent};

/// Equatorial Earth radius used by the pricing model.
pub const EARTH_RADIUS: Kilometers = Kilometers::new(6378.0);

struct AngleTerms {
    lat1: f64,
    lat2: f64,
    half_dlat: f64,
    half_dlon: f64,
}

impl AngleTerms {
    fn between(reference: &GeoPoint, point: &GeoPoint) -> Self {
        let lat1 = reference.latitude.to::<Radian>().value();
        let lon1 = reference.longitude.to::<Radian>().value();
        let lat2 = point.latitude.to::<Radian>().value();
        let lon2 = point.longitude.to::<Radian>().value();
        Self {
            lat1,
            lat2,
            half_dlat: (lat2 - lat1) / 2.0,
            half_dlon: (lon2 - lon1) / 2.0,
        }
    }
}

/// Arc length on a sphere for a haversine term `a`.
fn arc_length(a: f64, earth_radius: Kilometers) -> Kilometers {
    // Rounding can push `a` a hair outside [0, 1] near antipodes.
    let a = a.clamp(0.0, 1.0);
    Kilometers::new(2.0 * earth_radius.value() * a.sqrt().asin())
}

/// Haversine distance between two points.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)` and the distance is
/// `2·R·asin(√a)`. Identical points yield exactly zero. Inputs are not range
/// checked.
///
/// # Examples
///
/// ```
/// use quake_payout::algorithms::{haversine_distance, EARTH_RADIUS};
/// use quake_payout::core::GeoPoint;
///
/// let d = haversine_distance(&GeoPoint::new(35.0, 25.0), &GeoPoint::new(35.0268, 25.1561), EARTH_RADIUS);
/// assert!((d.value() - 14.541066).abs() < 1e-6);
/// ```
pub fn haversine_distance(reference: &GeoPoint, point: &GeoPoint, earth_radius: Kilometers) -> Kilometers {
    let r = AngleTerms::between(reference, point);
    let sin_dlat = r.half_dlat.sin();
    let sin_dlon = r.half_dlon.sin();
    let a = sin_dlat * sin_dlat + r.lat1.cos() * r.lat2.cos() * sin_dlon * sin_dlon;
    arc_length(a, earth_radius)
}

/// Haversine distance computed without the explicit cosine product.
///
/// Uses `cos(lat1)·cos(lat2) = 1 − sin²(Δlat/2) − sin²((lat1+lat2)/2)`. Agrees
/// with [`haversine_distance`] to floating-point precision.
pub fn haversine_distance_closed_form(
    reference: &GeoPoint,
    point: &GeoPoint,
    earth_radius: Kilometers,
) -> Kilometers {
    let r = AngleTerms::between(reference, point);
    let sin_dlat = r.half_dlat.sin();
    let sin_dlon = r.half_dlon.sin();
    let sin_mean = ((r.lat1 + r.lat2) / 2.0).sin();
    let sin2_dlat = sin_dlat * sin_dlat;
    let a = sin2_dlat + (1.0 - sin2_dlat - sin_mean * sin_mean) * sin_dlon * sin_dlon;
    arc_length(a, earth_radius)
}

/// Distances from `reference` to every point, in input order.
pub fn distances<'a, I>(reference: &GeoPoint, points: I, earth_radius: Kilometers) -> Vec<Kilometers>
where
    I: IntoIterator<Item = &'a GeoPoint>,
{
    points
        .into_iter()
        .map(|point| haversine_distance(reference, point, earth_radius))
        .collect()
}

/// Attaches the distance to `reference` to each event.
pub fn measure_events(reference: &GeoPoint, events: Vec<Event>, earth_radius: Kilometers) -> Vec<MeasuredEvent> {
    events
        .into_iter()
        .map(|event| {
            let distance = haversine_distance(reference, &event.epicenter, earth_radius);
            MeasuredEvent::new(event, distance)
        })
        .collect()
}
