//! Layered traveling-wave field.
//!
//! A fixed bank of randomized sine/cosine oscillators, sampled as a pure
//! function of (time, grid x, grid y). The bank is drawn once at
//! construction and never mutated afterwards, so samples are safe to read
//! from any number of places.

use rand::Rng;

use crate::constants::{FREQUENCY_RANGE, PHASE_RANGE, WAVE_AMPLITUDE};

/// One oscillator pair: a sine component indexed by x and a cosine
/// component indexed by y, each with its own frequency and phase.
#[derive(Clone, Copy, Debug)]
struct Oscillator {
    freq_x: f32,
    phase_x: f32,
    freq_y: f32,
    phase_y: f32,
}

/// Immutable bank of randomized traveling waves.
#[derive(Clone, Debug)]
pub struct WaveField {
    oscillators: Vec<Oscillator>,
}

impl WaveField {
    /// Draw `n` oscillator pairs from `rng`. Frequencies are uniform in
    /// [-FREQUENCY_RANGE, FREQUENCY_RANGE), phases in
    /// [-PHASE_RANGE, PHASE_RANGE).
    pub fn new(n: usize, rng: &mut impl Rng) -> Self {
        let mut oscillators = Vec::with_capacity(n);
        for _ in 0..n {
            oscillators.push(Oscillator {
                freq_x: rng.gen_range(-FREQUENCY_RANGE..FREQUENCY_RANGE),
                phase_x: rng.gen_range(-PHASE_RANGE..PHASE_RANGE),
                freq_y: rng.gen_range(-FREQUENCY_RANGE..FREQUENCY_RANGE),
                phase_y: rng.gen_range(-PHASE_RANGE..PHASE_RANGE),
            });
        }
        Self { oscillators }
    }

    /// Field with no oscillators; every sample is zero. Useful for tests
    /// and for holding the surface flat.
    pub fn still() -> Self {
        Self {
            oscillators: Vec::new(),
        }
    }

    /// Mean displacement of all oscillators at time `t` and grid position
    /// (`x`, `y`). Bounded by `2.0 * WAVE_AMPLITUDE`.
    pub fn sample(&self, t: f32, x: f32, y: f32) -> f32 {
        if self.oscillators.is_empty() {
            return 0.0;
        }

        let a = 1.0 / self.oscillators.len() as f32;
        let mut result = 0.0;
        for osc in &self.oscillators {
            result += ((t * osc.freq_x + x + osc.phase_x).sin()
                + (t * osc.freq_y + y + osc.phase_y).cos())
                * a;
        }
        result * WAVE_AMPLITUDE
    }

    /// Number of oscillator pairs in the bank.
    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn same_seed_gives_identical_samples() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = WaveField::new(20, &mut rng_a);
        let b = WaveField::new(20, &mut rng_b);

        for i in 0..50 {
            let t = i as f32 * 0.13;
            assert_eq!(a.sample(t, 3.0, 7.0), b.sample(t, 3.0, 7.0));
        }
    }

    #[test]
    fn samples_stay_within_the_amplitude_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let waves = WaveField::new(20, &mut rng);

        for i in 0..200 {
            let t = i as f32 * 0.37;
            for x in 0..14 {
                for y in 0..14 {
                    let s = waves.sample(t, x as f32, y as f32);
                    assert!(
                        s.abs() <= 2.0 * WAVE_AMPLITUDE,
                        "sample {} out of bounds at t={}",
                        s,
                        t
                    );
                }
            }
        }
    }

    #[test]
    fn still_field_is_always_zero() {
        let waves = WaveField::still();
        assert!(waves.is_empty());
        assert_eq!(waves.sample(12.5, 3.0, 4.0), 0.0);
    }
}
