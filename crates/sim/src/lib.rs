//! Liquid surface simulation.
//!
//! A sparse, jittered point grid perturbed by layered traveling waves and
//! a spring-damper relaxation network, with flat shading and perspective
//! projection for a triangulated "liquid" look.
//!
//! This crate is framework-agnostic - it handles simulation and shading
//! math only. Use the `game` crate for rendering with Macroquad.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use sim::LiquidSimulation;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut sim = LiquidSimulation::new(&mut rng).unwrap();
//!
//! // Run one tick
//! sim.update(1.0 / 60.0);
//! ```

pub mod constants;
pub mod input;
pub mod mesh;
pub mod physics;
pub mod shading;
pub mod waves;

pub use glam::{Vec2, Vec3};
pub use input::PointerState;
pub use mesh::{Mesh, MeshError, Point};
pub use waves::WaveField;

use rand::{rngs::StdRng, Rng, SeedableRng};

use constants::{GRID_BORDER, GRID_SIZE, JITTER, WAVE_COUNT};

/// Liquid surface simulation state.
///
/// Owns the mesh, the wave field, and the simulation clock; advanced by
/// one fixed tick per rendered frame.
pub struct LiquidSimulation {
    /// The point grid and its fixed triangulation.
    pub mesh: Mesh,
    /// Immutable wave field sampled every tick.
    pub waves: WaveField,
    /// Accumulated simulation time (fixed ticks, not wall clock).
    pub elapsed_time: f32,
    /// Ticks advanced since construction.
    pub frame: u64,

    /// Depth snapshot (pre-allocated to avoid per-frame allocation).
    depth_snapshot: Vec<f32>,
}

impl LiquidSimulation {
    /// Build the default-sized simulation, drawing wave parameters and
    /// grid jitter from `rng`. Fails if the triangulation input is
    /// degenerate.
    pub fn new(rng: &mut impl Rng) -> Result<Self, MeshError> {
        Self::with_size(GRID_SIZE, GRID_BORDER, rng)
    }

    /// Build the default-sized simulation from an integer seed.
    pub fn from_seed(seed: u64) -> Result<Self, MeshError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Build with explicit grid dimensions.
    pub fn with_size(
        grid_size: usize,
        border: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, MeshError> {
        let waves = WaveField::new(WAVE_COUNT, rng);
        let mesh = Mesh::build(grid_size, border, JITTER, rng)?;
        log::info!(
            "liquid mesh: {} points, {} triangles",
            mesh.points.len(),
            mesh.triangles.len()
        );

        let point_count = mesh.points.len();
        Ok(Self {
            mesh,
            waves,
            elapsed_time: 0.0,
            frame: 0,
            depth_snapshot: Vec::with_capacity(point_count),
        })
    }

    /// Apply this tick's pointer impulse. `cell_size` is the current
    /// pixels-per-cell scale used by the renderer.
    pub fn apply_pointer(&mut self, pointer: &PointerState, cell_size: f32) {
        input::apply_pointer(&mut self.mesh, pointer, cell_size);
    }

    /// Advance the simulation by one fixed tick.
    pub fn update(&mut self, dt: f32) {
        self.elapsed_time += dt;
        physics::step(
            &mut self.mesh,
            &self.waves,
            self.elapsed_time,
            &mut self.depth_snapshot,
        );
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_simulation_creation() {
        let mut rng = StdRng::seed_from_u64(3);
        let sim = LiquidSimulation::new(&mut rng).unwrap();
        assert_eq!(sim.mesh.side, GRID_SIZE + GRID_BORDER * 2);
        assert_eq!(sim.mesh.points.len(), sim.mesh.side * sim.mesh.side);
        assert_eq!(sim.waves.len(), WAVE_COUNT);
        assert_eq!(sim.elapsed_time, 0.0);
        assert_eq!(sim.frame, 0);
    }

    #[test]
    fn test_update_advances_the_clock() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut sim = LiquidSimulation::new(&mut rng).unwrap();

        for _ in 0..10 {
            sim.update(constants::DT);
        }

        assert_eq!(sim.frame, 10);
        assert!((sim.elapsed_time - 10.0 * constants::DT).abs() < 1e-6);
    }
}
