//! Pointer splashes
//!
//! A click displaces the nearest point and its neighbours with an
//! exponential falloff, then opens the spring mode window.

use rand::Rng;

use super::state::{SurfacePoint, SurfaceState};

/// Index of the point horizontally closest to `x` (first one on ties)
pub fn nearest_index(points: &[SurfacePoint], x: f32) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (i, p) in points.iter().enumerate() {
        let dist = (p.x - x).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

/// Falloff multiplier at index distance `distance`
#[inline]
pub fn splash_falloff(distance: usize, decay: f32) -> f32 {
    (-decay * distance as f32).exp()
}

/// Splash at `click_x` (viewport coordinates).
///
/// Clicks outside the surface still hit the closest edge point. Returns the
/// index of the struck point. A splash while paused shows on the frozen
/// frame; `resume` shifts its spring window along with the rise clock.
pub fn handle_pointer(state: &mut SurfaceState, click_x: f32, now: f64) -> usize {
    let center = nearest_index(&state.points, click_x);
    let radius = state.config.splash_radius;
    let (lo, hi) = state.config.jitter_band();
    let first = center.saturating_sub(radius);
    let last = center.saturating_add(radius).min(state.points.len() - 1);

    for i in first..=last {
        let distance = i.abs_diff(center);
        let jitter = if lo.is_finite() && hi.is_finite() && hi > lo {
            state.rng.random_range(lo..=hi)
        } else {
            1.0
        };
        let force = state.config.splash_force * splash_falloff(distance, state.config.splash_decay) * jitter;
        let point = &mut state.points[i];
        point.y += force;
        point.velocity += force * state.config.impulse_fraction;
    }

    state.last_impulse_time = Some(now);
    log::debug!("Splash at x={:.1} hit point {} (radius {})", click_x, center, radius);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tunables;
    use crate::sim::SurfaceMode;

    fn surface() -> SurfaceState {
        SurfaceState::new(60, 800.0, 600.0, 0.0).unwrap()
    }

    #[test]
    fn test_nearest_index() {
        let points: Vec<_> = (0..5).map(|i| SurfacePoint::at_rest(i as f32 * 10.0, 0.0)).collect();
        assert_eq!(nearest_index(&points, 0.0), 0);
        assert_eq!(nearest_index(&points, 14.0), 1);
        assert_eq!(nearest_index(&points, 16.0), 2);
        assert_eq!(nearest_index(&points, 15.0), 1);
        assert_eq!(nearest_index(&points, -500.0), 0);
        assert_eq!(nearest_index(&points, 500.0), 4);
    }

    #[test]
    fn test_falloff_decreasing() {
        for d in 0..20 {
            assert!(splash_falloff(d + 1, 0.3) < splash_falloff(d, 0.3));
        }
        assert_eq!(splash_falloff(0, 0.3), 1.0);
    }

    #[test]
    fn test_splash_locality_and_decay() {
        let mut state = surface();
        let before: Vec<f32> = state.points().iter().map(|p| p.y).collect();
        let x = state.points()[30].x;
        let center = handle_pointer(&mut state, x, 100.0);
        assert_eq!(center, 30);

        let deltas: Vec<f32> = state.points().iter().zip(&before).map(|(p, b)| p.y - b).collect();
        for (i, d) in deltas.iter().enumerate() {
            if i.abs_diff(30) > 12 {
                assert_eq!(*d, 0.0, "point {} outside the radius moved", i);
            } else {
                assert!(*d > 0.0);
            }
        }
        for d in 0..12 {
            assert!(deltas[30 + d + 1] < deltas[30 + d]);
            assert!(deltas[30 - d - 1] < deltas[30 - d]);
        }
    }

    #[test]
    fn test_splash_adds_velocity_fraction() {
        let mut state = surface();
        let x = state.points()[10].x;
        handle_pointer(&mut state, x, 0.0);
        let p = state.points()[10];
        let force = p.y - state.water_level();
        assert!((p.velocity - force * state.config.impulse_fraction).abs() < 1e-4);
    }

    #[test]
    fn test_splash_near_edge_clips_radius() {
        let mut state = surface();
        let center = handle_pointer(&mut state, -10_000.0, 0.0);
        assert_eq!(center, 0);
        assert!(state.points()[12].y > state.water_level());
        assert_eq!(state.points()[13].y, state.water_level());
    }

    #[test]
    fn test_splash_opens_spring_window() {
        let mut state = SurfaceState::new(5, 100.0, 100.0, 0.0).unwrap();
        let t0 = 1234.0;
        handle_pointer(&mut state, 50.0, t0);
        assert_eq!(state.last_impulse_time(), Some(t0));

        let window = state.config.impulse_mode_duration_ms;
        for now in [t0, t0 + window / 2.0, t0 + window - 0.001] {
            assert_eq!(state.mode_at(now), SurfaceMode::Spring);
        }
        for now in [t0 + window, t0 + window * 3.0] {
            assert_eq!(state.mode_at(now), SurfaceMode::Ambient);
        }
    }

    #[test]
    fn test_splash_while_paused_records_impulse() {
        let mut state = surface();
        crate::sim::pause(&mut state, 0.0);
        let center = handle_pointer(&mut state, 400.0, 10.0);
        assert_eq!(state.last_impulse_time(), Some(10.0));
        assert!(state.points()[center].y > state.water_level());

        // Frozen frame still shows the splash
        let before = state.points().to_vec();
        crate::sim::advance_frame(&mut state, 500.0);
        assert_eq!(state.points(), before.as_slice());

        // Spring window starts from the resumed clock
        crate::sim::resume(&mut state, 1000.0);
        assert_eq!(state.last_impulse_time(), Some(1010.0));
        assert_eq!(state.mode_at(1010.0 + state.config.impulse_mode_duration_ms - 1.0), SurfaceMode::Spring);
    }

    #[test]
    fn test_huge_radius_clips_to_surface() {
        let mut state = surface();
        state.set_tunables(Tunables::from_json(r#"{"splash_radius": 18446744073709551615}"#).unwrap());
        let x = state.points()[30].x;
        assert_eq!(handle_pointer(&mut state, x, 0.0), 30);
        let level = state.water_level();
        assert!(state.points().iter().all(|p| p.y > level));
    }

    #[test]
    fn test_non_finite_jitter_falls_back_to_unit() {
        for jitter in [f32::INFINITY, f32::NAN] {
            let mut state = surface();
            state.config.splash_jitter = jitter;
            let x = state.points()[30].x;
            handle_pointer(&mut state, x, 0.0);
            let force = state.points()[30].y - state.water_level();
            assert!((force - 15.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_zero_jitter_is_exact() {
        let mut state = surface();
        state.config.splash_jitter = 0.0;
        let x = state.points()[30].x;
        handle_pointer(&mut state, x, 0.0);
        let force = state.points()[31].y - state.water_level();
        assert!((force - 15.0 * (-0.3f32).exp()).abs() < 1e-4);
    }
}
