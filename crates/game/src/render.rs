//! Flat-shaded mesh rendering.
//!
//! Scales the visible grid to the viewport, clears to the base color, and
//! submits one filled triangle per mesh triangle in triangulation order.
//! No depth sorting: overlap is resolved by the planar triangulation, and
//! unprojectable triangles are skipped for the frame.

use macroquad::prelude::*;
use sim::constants::{BASE_COLOR, GRID_SIZE, MIN_CELL_SIZE};
use sim::shading;
use sim::LiquidSimulation;

/// Pixels per visible grid cell for the current viewport.
pub fn cell_size(width: f32, height: f32) -> f32 {
    (width.max(height) / GRID_SIZE as f32).max(MIN_CELL_SIZE)
}

/// Draw one frame of the simulation.
pub fn draw(sim: &LiquidSimulation, cell_size: f32, show_points: bool) {
    clear_background(color_of(BASE_COLOR));

    let border = sim.mesh.border as f32;
    let center = shading::projection_center(&sim.mesh);
    let to_screen =
        |v: sim::Vec2| vec2((v.x - border) * cell_size, (v.y - border) * cell_size);

    for triangle in &sim.mesh.triangles {
        let p0 = sim.mesh.points[triangle[0]].position;
        let p1 = sim.mesh.points[triangle[1]].position;
        let p2 = sim.mesh.points[triangle[2]].position;

        let Some((projected, rgb)) = shading::shade_triangle(p0, p1, p2, center) else {
            continue;
        };

        draw_triangle(
            to_screen(projected[0]),
            to_screen(projected[1]),
            to_screen(projected[2]),
            color_of(rgb),
        );
    }

    // Debug overlay: raw planar point positions.
    if show_points {
        for point in &sim.mesh.points {
            let s = to_screen(point.position.truncate());
            draw_rectangle(s.x - 1.0, s.y - 1.0, 2.0, 2.0, WHITE);
        }
    }
}

/// Convert a shaded [R, G, B] triple to a Macroquad color.
fn color_of(rgb: [f32; 3]) -> Color {
    Color::new(rgb[0], rgb[1], rgb[2], 1.0)
}
