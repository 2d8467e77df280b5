//! Property-based tests for the liquid surface simulation.
//!
//! These tests verify invariants hold across random seeds and run lengths:
//! - Wave samples stay within the amplitude bound
//! - Positions and velocities never go non-finite
//! - Grid indexing is a bijection for any grid shape

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use sim::constants::{DT, JITTER, WAVE_AMPLITUDE, WAVE_COUNT};
use sim::{LiquidSimulation, Mesh, WaveField};

proptest! {
    #[test]
    fn wave_samples_stay_bounded(
        seed in any::<u64>(),
        t in 0.0f32..600.0,
        x in 0.0f32..14.0,
        y in 0.0f32..14.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let waves = WaveField::new(WAVE_COUNT, &mut rng);

        // Each oscillator contributes sin + cos, so the field is bounded
        // by twice the amplitude scale.
        let sample = waves.sample(t, x, y);
        prop_assert!(sample.abs() <= 2.0 * WAVE_AMPLITUDE + 1e-5);
    }

    #[test]
    fn simulation_stays_finite(seed in any::<u64>(), ticks in 1usize..120) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sim = LiquidSimulation::new(&mut rng).unwrap();

        for _ in 0..ticks {
            sim.update(DT);
        }

        for point in &sim.mesh.points {
            prop_assert!(point.position.is_finite());
            prop_assert!(point.velocity.is_finite());
        }
    }

    #[test]
    fn grid_index_is_a_bijection(grid_size in 2usize..8, border in 0usize..3) {
        let mut rng = StdRng::seed_from_u64(9);
        let mesh = Mesh::build(grid_size, border, JITTER, &mut rng).unwrap();

        let side = mesh.side;
        let mut seen = vec![false; side * side];
        for y in 0..side {
            for x in 0..side {
                let idx = mesh.index(x, y);
                prop_assert!(idx < seen.len());
                prop_assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        prop_assert!(seen.iter().all(|&s| s));
    }
}
