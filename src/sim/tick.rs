//! Per-frame surface update
//!
//! level -> mode -> integrator -> outline, once per rendered frame.

use super::ambient::step_ambient;
use super::level::update_level;
use super::mode::SurfaceMode;
use super::spring::step_spring;
use super::state::SurfaceState;
use crate::renderer::{Outline, build_outline};

/// Advance the surface to `now` and return the outline to draw.
///
/// While paused nothing moves, but the outline is still rebuilt so a redraw
/// shows the frozen shape.
pub fn advance_frame(state: &mut SurfaceState, now: f64) -> Outline {
    if !state.is_paused() {
        step_physics(state, now);
    }
    build_outline(state)
}

fn step_physics(state: &mut SurfaceState, now: f64) {
    update_level(state, now);

    let mode = state.mode_at(now);
    if mode != state.mode {
        log::debug!("Surface mode {:?} -> {:?}", state.mode, mode);
        state.mode = mode;
    }

    let level = state.water_level;
    match mode {
        SurfaceMode::Spring => step_spring(&mut state.points, level, &state.config),
        SurfaceMode::Ambient => {
            state.ambient_phase += state.config.ambient_speed as f64;
            step_ambient(&mut state.points, level, state.ambient_phase, &state.config);
        }
    }
}
