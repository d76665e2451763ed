//! Property-based tests for the camera choreography using proptest.
//!
//! Frame deltas are drawn at random so the hold timer sees both very short
//! and very long frames.

use std::time::Duration;

use proptest::prelude::*;

use super::choreography::{CameraChoreography, CameraPhase};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Progress never leaves [0, 1] and the phase never moves backwards.
    #[test]
    fn prop_progress_clamped_and_phase_monotonic(
        deltas in prop::collection::vec(0u64..400, 1..1500),
        zoom_speed in 0.001f32..0.3,
    ) {
        let mut choreography = CameraChoreography {
            zoom_speed,
            ..Default::default()
        };
        let mut previous = choreography.phase();

        for ms in deltas {
            choreography.advance(Duration::from_millis(ms));
            let progress = choreography.progress();
            prop_assert!((0.0..=1.0).contains(&progress), "progress {} out of range", progress);

            let phase = choreography.phase();
            prop_assert!(phase >= previous, "phase went back from {:?} to {:?}", previous, phase);
            previous = phase;
        }
    }

    /// Each frame moves at most one phase forward, so no phase is skipped.
    #[test]
    fn prop_no_phase_skipped(
        deltas in prop::collection::vec(0u64..1000, 1..1500),
        zoom_speed in 0.001f32..1.5,
    ) {
        let mut choreography = CameraChoreography {
            zoom_speed,
            ..Default::default()
        };
        let order = [
            CameraPhase::ZoomIn,
            CameraPhase::Hold,
            CameraPhase::ZoomOut,
            CameraPhase::Settled,
        ];
        let index = |phase: CameraPhase| order.iter().position(|p| *p == phase).unwrap();

        for ms in deltas {
            let before = index(choreography.phase());
            choreography.advance(Duration::from_millis(ms));
            let after = index(choreography.phase());
            prop_assert!(after == before || after == before + 1);
        }
    }

    /// Settled positions are always the overview once reached.
    #[test]
    fn prop_camera_path_endpoints(zoom_speed in 0.001f32..0.5) {
        let mut choreography = CameraChoreography {
            zoom_speed,
            ..Default::default()
        };
        let mut last = None;
        let mut frames = 0;
        while !choreography.is_settled() {
            if let Some(pos) = choreography.advance(Duration::from_millis(16)) {
                last = Some(pos);
            }
            frames += 1;
            prop_assert!(frames < 100_000);
        }
        prop_assert_eq!(last, Some(choreography.overview));
    }
}
