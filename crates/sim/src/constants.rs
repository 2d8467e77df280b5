//! Tuning constants for the liquid surface.
//!
//! Grid geometry, wave field shape, spring/friction gains and the
//! three-color palette. Depth (`z`) grows away from the viewer; every
//! point relaxes back toward `Z_REST`.

// =============================================================================
// GRID GEOMETRY
// =============================================================================

/// Visible mesh cells per side.
pub const GRID_SIZE: usize = 10;

/// Extra off-screen cells on each side. Keeps neighbor averaging and
/// lighting artifacts away from the visible edge.
pub const GRID_BORDER: usize = 2;

/// Lower bound on the rendered cell size (pixels).
pub const MIN_CELL_SIZE: f32 = 50.0;

/// Span of the random offset applied to each point's cell center.
pub const JITTER: f32 = 0.8;

// =============================================================================
// DEPTH / SPRING
// =============================================================================

/// Rest depth every point's spring pulls toward. Also the perspective
/// reference: a point at this depth projects to its own (x, y).
pub const Z_REST: f32 = 10.0;

/// Gain on the neighbor-average smoothing term.
pub const SPREAD_FACTOR: f32 = 0.6;

/// Gain on the spring displacement accumulated into velocity per tick.
pub const DAMPING_FACTOR: f32 = 0.1;

/// Per-tick velocity retention. Below 1.0 so stored energy decays.
pub const FRICTION_FACTOR: f32 = 0.999;

// =============================================================================
// WAVE FIELD
// =============================================================================

/// Number of oscillator pairs in the wave field.
pub const WAVE_COUNT: usize = 20;

/// Amplitude scale on the summed wave displacement.
pub const WAVE_AMPLITUDE: f32 = 0.5;

/// Oscillator frequencies are drawn from [-FREQUENCY_RANGE, FREQUENCY_RANGE).
pub const FREQUENCY_RANGE: f32 = 2.0;

/// Oscillator phases are drawn from [-PHASE_RANGE, PHASE_RANGE).
pub const PHASE_RANGE: f32 = 5.0;

// =============================================================================
// INPUT / TIME
// =============================================================================

/// Depth kick applied at full pointer falloff.
pub const POINTER_IMPULSE: f32 = 1.1;

/// Fixed tick duration. The simulation advances by this amount once per
/// rendered frame regardless of wall-clock frame spacing.
pub const DT: f32 = 1.0 / 60.0;

// =============================================================================
// SHADING
// =============================================================================

/// Fixed light direction (normalized at use).
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 1.0, 0.0];

/// Background and flat-surface color [R, G, B], 0-1.
pub const BASE_COLOR: [f32; 3] = [47.0 / 255.0, 64.0 / 255.0, 80.0 / 255.0];

/// Blend target for back-facing triangles.
pub const SHADOW_COLOR: [f32; 3] = [31.0 / 255.0, 37.0 / 255.0, 43.0 / 255.0];

/// Blend target for light-facing triangles.
pub const LIGHT_COLOR: [f32; 3] = [36.0 / 255.0, 185.0 / 255.0, 159.0 / 255.0];

/// Depths below this are unprojectable; the triangle is skipped for the frame.
pub const PROJECTION_EPSILON: f32 = 1e-3;
