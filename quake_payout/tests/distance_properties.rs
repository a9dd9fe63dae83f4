//! Property tests for the haversine distance.

use proptest::prelude::*;
use quake_payout::algorithms::{distances, haversine_distance, haversine_distance_closed_form};
use quake_payout::core::GeoPoint;
use quake_payout::EARTH_RADIUS;

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in geo_point(), b in geo_point()) {
        let ab = haversine_distance(&a, &b, EARTH_RADIUS).value();
        let ba = haversine_distance(&b, &a, EARTH_RADIUS).value();
        prop_assert!((ab - ba).abs() < 1e-9, "{} vs {}", ab, ba);
    }

    #[test]
    fn distance_to_self_is_zero(p in geo_point()) {
        prop_assert_eq!(haversine_distance(&p, &p, EARTH_RADIUS).value(), 0.0);
    }

    #[test]
    fn distance_is_bounded(a in geo_point(), b in geo_point()) {
        let d = haversine_distance(&a, &b, EARTH_RADIUS).value();
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS.value() + 1e-6);
    }

    #[test]
    fn triangle_inequality_holds(a in geo_point(), b in geo_point(), c in geo_point()) {
        let ab = haversine_distance(&a, &b, EARTH_RADIUS).value();
        let bc = haversine_distance(&b, &c, EARTH_RADIUS).value();
        let ac = haversine_distance(&a, &c, EARTH_RADIUS).value();
        prop_assert!(ac <= ab + bc + 1e-3, "{} > {} + {}", ac, ab, bc);
    }

    #[test]
    fn closed_form_agrees(a in geo_point(), b in geo_point()) {
        let d1 = haversine_distance(&a, &b, EARTH_RADIUS).value();
        let d2 = haversine_distance_closed_form(&a, &b, EARTH_RADIUS).value();
        prop_assert!((d1 - d2).abs() < 1e-3, "{} vs {}", d1, d2);
    }

    #[test]
    fn batch_matches_pairwise(site in geo_point(), points in prop::collection::vec(geo_point(), 0..32)) {
        let batch = distances(&site, &points, EARTH_RADIUS);
        prop_assert_eq!(batch.len(), points.len());
        for (d, p) in batch.iter().zip(&points) {
            prop_assert_eq!(d.value(), haversine_distance(&site, p, EARTH_RADIUS).value());
        }
    }
}
