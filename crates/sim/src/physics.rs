//! Per-tick point update: wave forcing, neighbor spread, spring
//! integration.
//!
//! The tick is a full-grid parallel update: depths are snapshotted before
//! any point moves, and every spread term reads only the snapshot. One
//! point's update never observes another point's partial state, so the
//! result is independent of scan order.

use glam::Vec3;

use crate::constants::{DAMPING_FACTOR, FRICTION_FACTOR, SPREAD_FACTOR, Z_REST};
use crate::mesh::Mesh;
use crate::waves::WaveField;

/// Advance every point by one tick at `elapsed` simulation time.
///
/// `depth_snapshot` is caller-owned scratch, reused across ticks to avoid
/// per-frame allocation.
pub fn step(mesh: &mut Mesh, waves: &WaveField, elapsed: f32, depth_snapshot: &mut Vec<f32>) {
    // Depths as they stood at the start of the tick. Neighbor averages
    // read these, never this tick's partial updates.
    depth_snapshot.clear();
    depth_snapshot.extend(mesh.points.iter().map(|p| p.position.z));

    let side = mesh.side;
    for y in 0..side {
        for x in 0..side {
            let idx = mesh.index(x, y);
            let avg = mesh.average_adjacent(depth_snapshot, x, y);
            let point = &mut mesh.points[idx];

            // 1. Wave forcing at this grid cell.
            point.position.z += waves.sample(elapsed, x as f32, y as f32);

            // 2. Spread: pull toward the neighbor average. Approximates
            //    surface tension.
            point.position.z += (avg - point.position.z) * SPREAD_FACTOR;

            // 3. Spring toward the rest depth, friction, then integrate.
            let rest = Vec3::new(point.position.x, point.position.y, Z_REST);
            point.velocity += (rest - point.position) * DAMPING_FACTOR;
            point.velocity *= FRICTION_FACTOR;
            point.position += point.velocity;
        }
    }
}
