//! Procedural ambient waves
//!
//! Three sines of different wavelength and speed, weighted 0.5 / 0.3 / 0.2,
//! so the combined wave never exceeds 1.0 before scaling by the amplitude.
//! Points ease toward the wave instead of snapping to it.

use std::f64::consts::PI;

use super::state::SurfacePoint;
use crate::consts::{AMBIENT_COMPONENTS, AMBIENT_VELOCITY_FRACTION};
use crate::settings::Tunables;

/// Combined unit wave at normalised position `u` in `[0, 1]`
pub fn ambient_wave(u: f32, phase: f64) -> f32 {
    let u = u as f64;
    AMBIENT_COMPONENTS
        .iter()
        .map(|&(weight, cycles, rate)| {
            weight as f64 * (cycles as f64 * PI * u + rate as f64 * phase).sin()
        })
        .sum::<f64>() as f32
}

/// Height the ambient wave wants at `u` around `level`
#[inline]
pub fn ambient_target(level: f32, u: f32, phase: f64, amplitude: f32) -> f32 {
    level + ambient_wave(u, phase) * amplitude
}

/// Ease every point toward the ambient wave for `phase`.
///
/// Velocity is derived from the eased step rather than integrated, so a
/// following spring frame starts from a plausible motion instead of zero.
pub fn step_ambient(points: &mut [SurfacePoint], level: f32, phase: f64, config: &Tunables) {
    let last = points.len().saturating_sub(1).max(1) as f32;
    for (i, p) in points.iter_mut().enumerate() {
        let target = ambient_target(level, i as f32 / last, phase, config.ambient_amplitude);
        p.y += (target - p.y) * config.responsiveness;
        p.velocity = (p.y - p.previous_y) * AMBIENT_VELOCITY_FRACTION;
        p.previous_y = p.y - p.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(n: usize, level: f32) -> Vec<SurfacePoint> {
        (0..n).map(|i| SurfacePoint::at_rest(i as f32 * 10.0, level)).collect()
    }

    #[test]
    fn test_wave_bounded_by_unit() {
        for k in 0..500 {
            let phase = k as f64 * 0.37;
            for i in 0..=40 {
                let w = ambient_wave(i as f32 / 40.0, phase);
                assert!(w.abs() <= 1.0 + 1e-6, "wave {} at phase {}", w, phase);
            }
        }
    }

    #[test]
    fn test_wave_at_origin_phase() {
        assert!(ambient_wave(0.0, 0.0).abs() < 1e-6);
        let expected = 0.5 * (1.5 * PI).sin() + 0.3 * (2.6 * PI).sin() + 0.2 * (0.9 * PI).sin();
        assert!((ambient_wave(0.5, 0.0) as f64 - expected).abs() < 1e-5);
    }

    #[test]
    fn test_step_eases_toward_target() {
        let mut config = Tunables::default();
        config.responsiveness = 0.25;
        let mut points = flat(11, 100.0);
        let phase = 1.0;
        step_ambient(&mut points, 100.0, phase, &config);
        for (i, p) in points.iter().enumerate() {
            let target = ambient_target(100.0, i as f32 / 10.0, phase, config.ambient_amplitude);
            assert!((p.y - (100.0 + (target - 100.0) * 0.25)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_velocity_bookkeeping() {
        let config = Tunables::default();
        let mut points = flat(5, 50.0);
        points[2].previous_y = 48.0;
        step_ambient(&mut points, 50.0, 0.3, &config);
        let p = points[2];
        assert!((p.velocity - (p.y - 48.0) * 0.2).abs() < 1e-5);
        assert!((p.previous_y - (p.y - p.velocity)).abs() < 1e-5);
    }

    #[test]
    fn test_steady_state_within_amplitude() {
        let config = Tunables::default();
        let mut points = flat(30, 200.0);
        let mut phase = 0.0;
        for _ in 0..2000 {
            phase += config.ambient_speed as f64;
            step_ambient(&mut points, 200.0, phase, &config);
            for p in &points {
                assert!((p.y - 200.0).abs() <= config.ambient_amplitude + 1e-3);
            }
        }
    }
}
