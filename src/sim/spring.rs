//! Damped coupled springs
//!
//! Explicit Euler step of a damped 1-D wave equation: every point is pulled
//! toward the water level, interior points also toward the average of their
//! two neighbours. Edge points have no neighbour term.

use super::state::SurfacePoint;
use crate::settings::Tunables;

/// Advance all points one spring frame toward `level`
pub fn step_spring(points: &mut [SurfacePoint], level: f32, config: &Tunables) {
    for p in points.iter_mut() {
        p.velocity += (level - p.y) * config.spring_stiffness;
    }

    // Heights are untouched until the final pass, so neighbours read this frame's values
    for i in 1..points.len().saturating_sub(1) {
        let neighbor_avg = (points[i - 1].y + points[i + 1].y) / 2.0;
        points[i].velocity += (neighbor_avg - points[i].y) * config.neighbor_spread;
    }

    for p in points.iter_mut() {
        p.previous_y = p.y;
        p.y += p.velocity;
        p.velocity *= config.damping;
    }
}
