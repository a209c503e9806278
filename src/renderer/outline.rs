//! Closed fill outline of the surface
//!
//! The outline runs bottom-left -> surface at x=0 -> visible points ->
//! surface at x=width -> bottom-right, then closes. A Catmull-Rom pass turns
//! the polyline into cubic Bézier segments so discrete points do not show as
//! facets.

use glam::Vec2;

use super::vertex::OutlineVertex;
use crate::sim::{SurfaceState, height_at_x};

/// Anchor of a cubic Bézier path with handles relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineSegment {
    pub point: Vec2,
    pub handle_in: Vec2,
    pub handle_out: Vec2,
}

impl OutlineSegment {
    /// Corner with no curvature
    pub fn corner(point: Vec2) -> Self {
        Self {
            point,
            handle_in: Vec2::ZERO,
            handle_out: Vec2::ZERO,
        }
    }
}

/// Renderable outline; owns no rendering state
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub segments: Vec<OutlineSegment>,
    pub closed: bool,
}

impl Outline {
    /// Sample the curve into a polygon, `steps` samples per segment
    pub fn flatten(&self, steps: usize) -> Vec<Vec2> {
        let steps = steps.max(1);
        let n = self.segments.len();
        let spans = if self.closed { n } else { n.saturating_sub(1) };
        let mut out = Vec::with_capacity(spans * steps + 1);

        for i in 0..spans {
            let a = &self.segments[i];
            let b = &self.segments[(i + 1) % n];
            let c1 = a.point + a.handle_out;
            let c2 = b.point + b.handle_in;
            for s in 0..steps {
                let t = s as f32 / steps as f32;
                out.push(cubic_bezier(a.point, c1, c2, b.point, t));
            }
        }
        if !self.closed {
            if let Some(last) = self.segments.last() {
                out.push(last.point);
            }
        }
        out
    }

    /// Flattened outline as GPU-ready vertices
    pub fn to_vertices(&self, steps: usize) -> Vec<OutlineVertex> {
        self.flatten(steps)
            .into_iter()
            .map(|p| OutlineVertex::new(p.x, p.y))
            .collect()
    }
}

/// Point on a cubic Bézier at `t`
#[inline]
fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Raw outline corners for the current surface, before smoothing
pub fn outline_polyline(state: &SurfaceState) -> Vec<Vec2> {
    let width = state.viewport_width();
    let height = state.viewport_height();
    let spacing = state.spacing();
    let level = state.water_level();
    let points = state.points();

    let mut poly = Vec::with_capacity(points.len() + 4);
    poly.push(Vec2::new(0.0, height));
    poly.push(Vec2::new(0.0, height_at_x(points, 0.0, level)));
    poly.extend(
        points
            .iter()
            .filter(|p| p.x >= -spacing && p.x <= width + spacing)
            .map(|p| Vec2::new(p.x, p.y)),
    );
    poly.push(Vec2::new(width, height_at_x(points, width, level)));
    poly.push(Vec2::new(width, height));
    poly
}

/// Catmull-Rom handles for a closed polyline.
///
/// `alpha` selects the parameterisation: 0 uniform, 0.5 centripetal, 1 chordal.
pub fn smooth_closed(poly: &[Vec2], alpha: f32) -> Vec<OutlineSegment> {
    let n = poly.len();
    if n < 3 {
        return poly.iter().copied().map(OutlineSegment::corner).collect();
    }

    (0..n)
        .map(|i| {
            let p0 = poly[(i + n - 1) % n];
            let p1 = poly[i];
            let p2 = poly[(i + 1) % n];
            let d1_a = p0.distance(p1).powf(alpha);
            let d2_a = p1.distance(p2).powf(alpha);
            let d1_2a = d1_a * d1_a;
            let d2_2a = d2_a * d2_a;

            let mut segment = OutlineSegment::corner(p1);

            // Weights sum to the denominator, so handles are translation invariant
            let a = 2.0 * d2_2a + 3.0 * d1_a * d2_a + d1_2a;
            let den = 3.0 * d2_a * (d2_a + d1_a);
            if den != 0.0 {
                segment.handle_in = (p0 * d2_2a - p2 * d1_2a + p1 * a) / den - p1;
            }

            let a = 2.0 * d1_2a + 3.0 * d1_a * d2_a + d2_2a;
            let den = 3.0 * d1_a * (d1_a + d2_a);
            if den != 0.0 {
                segment.handle_out = (p2 * d1_2a - p0 * d2_2a + p1 * a) / den - p1;
            }

            segment
        })
        .collect()
}

/// Build the smoothed closed outline of `state`
pub fn build_outline(state: &SurfaceState) -> Outline {
    let poly = outline_polyline(state);
    Outline {
        segments: smooth_closed(&poly, state.config.mesh_smoothing_factor),
        closed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_frame() {
        let state = SurfaceState::new(5, 100.0, 100.0, 0.0).unwrap();
        let poly = outline_polyline(&state);
        let level = state.water_level();

        assert_eq!(poly[0], Vec2::new(0.0, 100.0));
        assert_eq!(poly[1], Vec2::new(0.0, level));
        assert_eq!(poly[poly.len() - 2], Vec2::new(100.0, level));
        assert_eq!(poly[poly.len() - 1], Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_polyline_visible_points_only() {
        // 5 points over [-20, 120] with spacing 35: x = -20, 15, 50, 85, 120
        let state = SurfaceState::new(5, 100.0, 100.0, 0.0).unwrap();
        let poly = outline_polyline(&state);
        let inner: Vec<f32> = poly[2..poly.len() - 2].iter().map(|p| p.x).collect();
        assert_eq!(inner.len(), 5);
        assert!(inner.windows(2).all(|w| w[0] < w[1]));

        let state = SurfaceState::new(61, 100.0, 100.0, 0.0).unwrap();
        let poly = outline_polyline(&state);
        let spacing = state.spacing();
        for p in &poly[2..poly.len() - 2] {
            assert!(p.x >= -spacing && p.x <= 100.0 + spacing);
        }
        assert!(poly.len() - 4 < 61);
    }

    #[test]
    fn test_edge_heights_interpolated() {
        let mut state = SurfaceState::new(5, 100.0, 100.0, 0.0).unwrap();
        // x = -20 and x = 15 bracket the left edge
        state.points[0].y = 10.0;
        state.points[1].y = 45.0;
        let poly = outline_polyline(&state);
        assert!((poly[1].y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_uniform_handles() {
        let poly = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let segs = smooth_closed(&poly, 0.0);
        // Uniform Catmull-Rom: handle_out = (next - prev) / 6
        let expected = (poly[2] - poly[0]) / 6.0;
        assert!((segs[1].handle_out - expected).length() < 1e-5);
        assert!((segs[1].handle_in + expected).length() < 1e-5);
    }

    #[test]
    fn test_smoothing_factor_changes_handles() {
        // Uneven spacing: short hop in, long hop out
        let poly = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(30.0, 10.0),
            Vec2::new(0.0, 20.0),
        ];
        let uniform = smooth_closed(&poly, 0.0);
        let chordal = smooth_closed(&poly, 1.0);
        assert!((uniform[1].handle_out - chordal[1].handle_out).length() > 0.1);
        assert!((uniform[1].handle_in - chordal[1].handle_in).length() > 0.1);
        // Chordal handles scale with the adjacent chord, so the short side stays short
        assert!(chordal[1].handle_in.length() < uniform[1].handle_in.length());
    }

    #[test]
    fn test_outline_uses_configured_factor() {
        let mut state = SurfaceState::new(12, 300.0, 200.0, 0.0).unwrap();
        state.points[5].y += 40.0;
        state.points[6].y -= 25.0;
        state.config.mesh_smoothing_factor = 0.0;
        let uniform = build_outline(&state);
        state.config.mesh_smoothing_factor = 1.0;
        let chordal = build_outline(&state);
        assert_eq!(uniform.segments.len(), chordal.segments.len());
        assert_ne!(uniform, chordal);
        assert_eq!(chordal, Outline { segments: smooth_closed(&outline_polyline(&state), 1.0), closed: true });
    }

    #[test]
    fn test_collinear_points_keep_straight_handles() {
        let poly = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let segs = smooth_closed(&poly, 0.5);
        assert!(segs[1].handle_in.y.abs() < 1e-5);
        assert!(segs[1].handle_out.y.abs() < 1e-5);
        assert!(segs[1].handle_out.x > 0.0);
    }

    #[test]
    fn test_duplicate_points_do_not_produce_nan() {
        let poly = vec![
            Vec2::new(0.0, 5.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(10.0, 10.0),
        ];
        for seg in smooth_closed(&poly, 0.5) {
            assert!(seg.handle_in.is_finite() && seg.handle_out.is_finite());
        }
    }

    #[test]
    fn test_flatten_closed_passes_through_anchors() {
        let state = SurfaceState::new(10, 200.0, 100.0, 0.0).unwrap();
        let outline = build_outline(&state);
        let flat = outline.flatten(4);
        assert_eq!(flat.len(), outline.segments.len() * 4);
        for (i, seg) in outline.segments.iter().enumerate() {
            assert!((flat[i * 4] - seg.point).length() < 1e-4);
        }
        assert_eq!(outline.to_vertices(4).len(), flat.len());
    }
}
