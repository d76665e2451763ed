//! Property-based tests for the orbit model using proptest.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::OrbitSettings;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A full turn of the angle lands on the same planar position.
    #[test]
    fn prop_orbit_is_periodic(
        distance in 1.0f64..500.0,
        angle in -100.0f64..100.0,
    ) {
        let settings = OrbitSettings::default();
        let (x0, z0) = settings.planar_position(distance, angle);
        let (x1, z1) = settings.planar_position(distance, angle + TAU);

        prop_assert!((x0 - x1).abs() < 1e-9 * distance.max(1.0) * 100.0);
        prop_assert!((z0 - z1).abs() < 1e-9 * distance.max(1.0) * 100.0);
    }

    /// Every position lies on the ellipse with semi-axes (d, 0.9 d).
    #[test]
    fn prop_position_on_ellipse(
        distance in 1.0f64..500.0,
        angle in 0.0f64..TAU,
    ) {
        let settings = OrbitSettings::default();
        let (x, z) = settings.planar_position(distance, angle);
        let minor = distance * 0.9;
        let on_curve = (x / distance).powi(2) + (z / minor).powi(2);
        prop_assert!((on_curve - 1.0).abs() < 1e-9);
    }

    /// One orbital period of clock time is exactly one turn.
    #[test]
    fn prop_period_maps_to_full_turn(period in 0.01f64..200.0) {
        let settings = OrbitSettings::default();
        let period_ms = period * settings.period_scale / settings.time_scale;
        let angle = settings.angle(period_ms, period);
        prop_assert!((angle - TAU).abs() < 1e-6);
    }
}
