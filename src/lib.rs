//! Rising Water - a liquid fill surface that rises over a work session
//!
//! Core modules:
//! - `sim`: Surface simulation (geometry, rising level, spring and ambient physics, splashes)
//! - `renderer`: Smoothed closed outline built from the surface each frame
//! - `settings`: Flat tunables record the host reads and writes between frames
//! - `platform`: Wall clock and browser bindings
//! - `error`: Error type for construction, resize and settings I/O

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::WaterError;
pub use renderer::{Outline, OutlineSegment, OutlineVertex};
pub use settings::Tunables;
pub use sim::{ModePolicy, SurfaceMode, SurfacePoint, SurfaceState};

/// Simulation configuration constants
pub mod consts {
    /// Point count used by the default host
    pub const DEFAULT_TOTAL_POINTS: usize = 60;
    /// Nominal frame interval of the host driver (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Ambient wave components as (weight, spatial half-cycles, phase rate)
    pub const AMBIENT_COMPONENTS: [(f32, f32, f32); 3] = [(0.5, 3.0, 1.0), (0.3, 5.2, 1.4), (0.2, 1.8, 0.7)];
    /// Fraction of the eased displacement kept as velocity in ambient mode
    pub const AMBIENT_VELOCITY_FRACTION: f32 = 0.2;

    /// Energy policy: a point counts once it strays this fraction of the ambient amplitude
    pub const ENERGY_DISPLACEMENT_FRACTION: f32 = 0.5;
    /// Energy policy: a point counts once it moves faster than this (px/frame)
    pub const ENERGY_VELOCITY_LIMIT: f32 = 2.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
