//! Pointer bridge: maps the polled pointer into a depth impulse on the
//! mesh point under it.

use glam::Vec2;

use crate::constants::POINTER_IMPULSE;
use crate::mesh::Mesh;

/// Current pointer state, polled once per tick. Position is screen pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

/// Apply this tick's pointer impulse.
///
/// The pointer pixel position maps to grid space via `cell_size`; the
/// target is the point whose cell contains the pointer (truncation, not a
/// nearest-neighbor search). The impulse falls off linearly with planar
/// distance and accumulates across held ticks; the spring relaxation pulls
/// the depth back toward rest afterwards. Does nothing when released, or
/// when the pointer maps off the padded grid.
pub fn apply_pointer(mesh: &mut Mesh, pointer: &PointerState, cell_size: f32) {
    if !pointer.pressed {
        return;
    }

    let grid_pos = pointer.position / cell_size + Vec2::splat(mesh.border as f32);
    let gx = grid_pos.x.floor() as i32;
    let gy = grid_pos.y.floor() as i32;
    if gx < 0 || gy < 0 || gx >= mesh.side as i32 || gy >= mesh.side as i32 {
        return;
    }

    let idx = mesh.index(gx as usize, gy as usize);
    let point = &mut mesh.points[idx];
    let distance = grid_pos.distance(point.position.truncate());
    let falloff = (1.0 - distance).clamp(0.0, 1.0);
    point.position.z += POINTER_IMPULSE * falloff;
}
