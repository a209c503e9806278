//! Rising water level, pause and resume
//!
//! The level moves from `start_water_level` to `end_water_level` over
//! `animation_duration_ms`. Pausing freezes the rise clock; resuming shifts
//! the anchors forward by the paused interval so progress continues where it
//! stopped.

use super::state::SurfaceState;
use crate::lerp;

/// Rise progress in `[0, 1]` for a clock anchored at `start_time`.
///
/// A non-positive duration means the rise is already complete.
pub fn progress_at(start_time: f64, duration: f64, now: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((now - start_time) / duration).clamp(0.0, 1.0) as f32
}

/// Rise progress of `state` at `now`, measured at the pause instant while paused
pub fn rise_progress(state: &SurfaceState, now: f64) -> f32 {
    let clock = state.paused_at.unwrap_or(now);
    progress_at(state.animation_start_time, state.config.animation_duration_ms, clock)
}

/// Move the water level to its position for `now`
pub fn update_level(state: &mut SurfaceState, now: f64) {
    let progress = rise_progress(state, now);
    state.water_level = lerp(state.start_water_level, state.end_water_level, progress);
}

/// Freeze the rise clock and all motion. Pausing twice keeps the first instant.
pub fn pause(state: &mut SurfaceState, now: f64) {
    if state.paused_at.is_some() {
        return;
    }
    state.paused_at = Some(now);
    log::info!("Surface paused at progress {:.2}", rise_progress(state, now));
}

/// Resume after [`pause`], excluding the paused interval from both clocks
pub fn resume(state: &mut SurfaceState, now: f64) {
    let Some(paused_at) = state.paused_at.take() else {
        return;
    };
    let paused_for = (now - paused_at).max(0.0);
    state.animation_start_time += paused_for;
    if let Some(t) = state.last_impulse_time.as_mut() {
        *t += paused_for;
    }
    log::info!("Surface resumed after {:.0} ms", paused_for);
}

/// Start the rise over from the bottom at `now` (new work session)
pub fn restart_rise(state: &mut SurfaceState, now: f64) {
    state.paused_at = None;
    state.animation_start_time = now;
    state.water_level = state.start_water_level;
    log::info!(
        "Rise restarted: {:.1} -> {:.1} over {:.0} ms",
        state.start_water_level,
        state.end_water_level,
        state.config.animation_duration_ms
    );
}
