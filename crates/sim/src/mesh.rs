//! Point mesh: jittered grid construction and one-shot Delaunay
//! triangulation.
//!
//! Points live in a flat row-major vector over the border-padded grid.
//! The triangulation topology is computed once from the initial planar
//! positions and stays fixed for the whole run; only point geometry moves.

use glam::Vec3;
use rand::Rng;

use crate::constants::Z_REST;

/// A mesh vertex. `position.z` is the animated depth; x and y start near
/// their cell center and the spring rest target tracks the current x/y.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Fatal mesh-construction failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// The triangulator produced no triangles: fewer than 3 points, or all
    /// points collinear. The simulation must not run on a partial mesh.
    DegenerateInput { point_count: usize },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::DegenerateInput { point_count } => write!(
                f,
                "triangulation input is degenerate ({point_count} points)"
            ),
        }
    }
}

impl std::error::Error for MeshError {}

/// Grid of points plus the fixed triangulation connecting them.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Visible cells per side.
    pub grid_size: usize,
    /// Off-screen margin cells on each side.
    pub border: usize,
    /// Total points per side (`grid_size + 2 * border`).
    pub side: usize,
    /// Row-major points, indexed `y * side + x`.
    pub points: Vec<Point>,
    /// Vertex-index triples in triangulation order.
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
    /// Build the padded grid with per-point jitter drawn from `rng`,
    /// triangulate it once, and start every point at the rest depth with
    /// zero velocity.
    pub fn build(
        grid_size: usize,
        border: usize,
        jitter: f32,
        rng: &mut impl Rng,
    ) -> Result<Self, MeshError> {
        let side = grid_size + border * 2;

        let mut points = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                let offset_x = (rng.gen::<f32>() - 0.5) * jitter;
                let offset_y = (rng.gen::<f32>() - 0.5) * jitter;
                points.push(Point {
                    position: Vec3::new(
                        x as f32 + 0.5 + offset_x,
                        y as f32 + 0.5 + offset_y,
                        Z_REST,
                    ),
                    velocity: Vec3::ZERO,
                });
            }
        }

        let sites: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point {
                x: p.position.x as f64,
                y: p.position.y as f64,
            })
            .collect();
        let triangulation = delaunator::triangulate(&sites);
        if triangulation.triangles.is_empty() {
            return Err(MeshError::DegenerateInput {
                point_count: points.len(),
            });
        }

        let triangles = triangulation
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();

        Ok(Self {
            grid_size,
            border,
            side,
            points,
            triangles,
        })
    }

    /// Flat index of grid position (`x`, `y`).
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.side + x
    }

    /// Mean depth of the up-to-8 neighbors of (`x`, `y`), read from the
    /// row-major `depths` snapshot. Neighbors off the padded grid count as
    /// the rest depth.
    pub fn average_adjacent(&self, depths: &[f32], x: usize, y: usize) -> f32 {
        let side = self.side as i32;
        let mut sum = 0.0;
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                sum += if nx < 0 || ny < 0 || nx >= side || ny >= side {
                    Z_REST
                } else {
                    depths[ny as usize * self.side + nx as usize]
                };
            }
        }
        sum / 8.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn test_mesh() -> Mesh {
        let mut rng = StdRng::seed_from_u64(11);
        Mesh::build(4, 1, 0.8, &mut rng).expect("4x4 grid should triangulate")
    }

    #[test]
    fn index_covers_the_grid_without_collisions() {
        let mesh = test_mesh();
        let mut seen = vec![false; mesh.side * mesh.side];
        for y in 0..mesh.side {
            for x in 0..mesh.side {
                let idx = mesh.index(x, y);
                assert!(!seen[idx], "index collision at ({}, {})", x, y);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn average_substitutes_rest_depth_off_the_grid() {
        let mesh = test_mesh();
        let depths = vec![5.0; mesh.points.len()];

        // Interior point: all 8 neighbors real.
        assert!((mesh.average_adjacent(&depths, 2, 2) - 5.0).abs() < 1e-6);

        // Corner point: 3 real neighbors, 5 substituted rest depths.
        let expected = (3.0 * 5.0 + 5.0 * Z_REST) / 8.0;
        assert!((mesh.average_adjacent(&depths, 0, 0) - expected).abs() < 1e-6);
    }

    #[test]
    fn triangle_indices_are_in_range() {
        let mesh = test_mesh();
        for triangle in &mesh.triangles {
            for &idx in triangle {
                assert!(idx < mesh.points.len());
            }
        }
    }
}
