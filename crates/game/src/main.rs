//! Liquid Surface - interactive demo
//!
//! A triangulated point grid rippled by layered traveling waves and
//! pointer presses, flat-shaded and drawn with Macroquad.
//! Press and drag to disturb the surface.

use macroquad::prelude::*;
use sim::constants::DT;
use sim::{LiquidSimulation, PointerState};

mod render;

fn window_conf() -> Conf {
    Conf {
        window_title: "Liquid Surface".to_owned(),
        window_width: 800,
        window_height: 800,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let seed = macroquad::miniquad::date::now() as u64;
    let mut sim = LiquidSimulation::from_seed(seed).expect("liquid mesh failed to triangulate");

    let mut paused = false;
    let mut show_points = false;

    loop {
        // --- INPUT ---
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::P) {
            show_points = !show_points;
        }
        if is_key_pressed(KeyCode::R) {
            // Rebuild with a fresh seed
            let seed = macroquad::miniquad::date::now() as u64;
            log::info!("reseeding liquid surface (seed {})", seed);
            sim = LiquidSimulation::from_seed(seed).expect("liquid mesh failed to triangulate");
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let (mx, my) = mouse_position();
        let pointer = PointerState {
            position: sim::Vec2::new(mx, my),
            pressed: is_mouse_button_down(MouseButton::Left),
        };

        // --- UPDATE ---
        let cell_size = render::cell_size(screen_width(), screen_height());
        if !paused {
            sim.apply_pointer(&pointer, cell_size);
            sim.update(DT);
        }

        // --- RENDER ---
        render::draw(&sim, cell_size, show_points);

        draw_text(
            &format!(
                "Points: {} | Triangles: {} | FPS: {} | {}",
                sim.mesh.points.len(),
                sim.mesh.triangles.len(),
                get_fps(),
                if paused { "PAUSED" } else { "Running" }
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            "Drag to ripple | [Space] Pause  [P] Points  [R] Reseed  [Esc] Quit",
            10.0,
            screen_height() - 10.0,
            16.0,
            GRAY,
        );

        next_frame().await
    }
}
