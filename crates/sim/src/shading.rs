//! Flat shading and perspective projection.
//!
//! One normal and one light calculation per triangle; vertex depths drive
//! a perspective divide around the visible-grid center. Unprojectable
//! vertices (depth at or near zero, or non-finite) mark the triangle as
//! skipped for the frame rather than failing the loop.

use glam::{Vec2, Vec3};

use crate::constants::{
    BASE_COLOR, LIGHT_COLOR, LIGHT_DIRECTION, PROJECTION_EPSILON, SHADOW_COLOR, Z_REST,
};
use crate::mesh::Mesh;

/// Geometric normal of the triangle (`p0`, `p1`, `p2`).
pub fn triangle_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0)
}

/// Lighting intensity in [-1, 1] for a surface normal under `light`.
/// Degenerate vectors resolve to 0, which shades as the base color.
pub fn light_intensity(normal: Vec3, light: Vec3) -> f32 {
    light.normalize_or_zero().dot(normal.normalize_or_zero())
}

/// Flat surface color for a lighting intensity `d` in [-1, 1].
///
/// Negative intensity blends the base color toward the shadow color by
/// `|d|`, non-negative toward the light color by `d`. Endpoints are exact.
pub fn surface_color(d: f32) -> [f32; 3] {
    let (target, amount) = if d < 0.0 {
        (SHADOW_COLOR, -d)
    } else {
        (LIGHT_COLOR, d)
    };
    [
        lerp(BASE_COLOR[0], target[0], amount),
        lerp(BASE_COLOR[1], target[1], amount),
        lerp(BASE_COLOR[2], target[2], amount),
    ]
}

/// Projection center of a mesh: the midpoint of the visible grid extent
/// in padded grid coordinates.
pub fn projection_center(mesh: &Mesh) -> f32 {
    (mesh.grid_size / 2 + mesh.border) as f32
}

/// Perspective-project a mesh point onto the grid plane around `center`.
///
/// A point at the rest depth maps to its own (x, y). Returns `None` for
/// non-finite positions or depths below `PROJECTION_EPSILON`.
pub fn project(p: Vec3, center: f32) -> Option<Vec2> {
    if !p.is_finite() || p.z < PROJECTION_EPSILON {
        return None;
    }

    let scale = Z_REST / p.z;
    Some(Vec2::new(
        scale * (p.x - center) + center,
        scale * (p.y - center) + center,
    ))
}

/// Shade and project one triangle under the fixed light direction.
///
/// Returns the three projected vertices (grid coordinates) and the flat
/// color, or `None` when any vertex is unprojectable this frame.
pub fn shade_triangle(p0: Vec3, p1: Vec3, p2: Vec3, center: f32) -> Option<([Vec2; 3], [f32; 3])> {
    let v0 = project(p0, center)?;
    let v1 = project(p1, center)?;
    let v2 = project(p2, center)?;

    let light = Vec3::from_array(LIGHT_DIRECTION);
    let d = light_intensity(triangle_normal(p0, p1, p2), light);
    Some(([v0, v1, v2], surface_color(d)))
}

/// Linear interpolation from `a` to `b`.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}
