//! Spring / ambient mode selection
//!
//! A splash switches the surface into spring mode; it falls back to ambient
//! waves once the active policy says the impulse has played out.

use serde::{Deserialize, Serialize};

use super::ambient::ambient_target;
use super::state::SurfaceState;
use crate::consts::{ENERGY_DISPLACEMENT_FRACTION, ENERGY_VELOCITY_LIMIT};

/// Which integrator drives the surface this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceMode {
    /// Damped coupled springs after a splash
    Spring,
    /// Procedural multi-sine waves
    Ambient,
}

/// Rule used to leave spring mode. Only one is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ModePolicy {
    /// Spring mode for `impulse_mode_duration_ms` after the last splash
    #[default]
    Timeout,
    /// Spring mode while the surface strays from the ambient wave by more
    /// than `threshold` (summed displacement plus speed of outlying points)
    Energy { threshold: f32 },
}

/// Time-based decision: spring inside the window after the last splash
pub fn timeout_mode(last_impulse_time: Option<f64>, window_ms: f64, now: f64) -> SurfaceMode {
    match last_impulse_time {
        Some(t) if now - t < window_ms => SurfaceMode::Spring,
        _ => SurfaceMode::Ambient,
    }
}

/// Deviation of the surface from the ambient wave it would otherwise show
pub fn interaction_energy(state: &SurfaceState) -> f32 {
    let amplitude = state.config.ambient_amplitude;
    let last = state.points.len().saturating_sub(1).max(1) as f32;

    state
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let expected = ambient_target(state.water_level, i as f32 / last, state.ambient_phase, amplitude);
            let displacement = (p.y - expected).abs();
            let speed = p.velocity.abs();
            if displacement > amplitude * ENERGY_DISPLACEMENT_FRACTION || speed > ENERGY_VELOCITY_LIMIT {
                displacement + speed
            } else {
                0.0
            }
        })
        .sum()
}

impl SurfaceState {
    /// Mode the selector picks at `now`, without advancing anything
    pub fn mode_at(&self, now: f64) -> SurfaceMode {
        match self.config.mode_policy {
            ModePolicy::Timeout => timeout_mode(self.last_impulse_time, self.config.impulse_mode_duration_ms, now),
            ModePolicy::Energy { threshold } => {
                if interaction_energy(self) > threshold {
                    SurfaceMode::Spring
                } else {
                    SurfaceMode::Ambient
                }
            }
        }
    }
}
