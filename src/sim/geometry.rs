//! Point layout and viewport resize
//!
//! Points span the viewport plus an off-screen margin on each side, so the
//! filled shape never shows a seam at the screen edge.

use super::level::rise_progress;
use super::state::{SurfacePoint, SurfaceState};
use crate::error::WaterError;
use crate::lerp;

/// Horizontal layout derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Margin beyond each screen edge
    pub extension_width: f32,
    /// Distance between adjacent points
    pub spacing: f32,
}

impl Layout {
    /// Layout for `total_points` (at least 2) across the extended width
    pub fn for_viewport(width: f32, total_points: usize, extension_fraction: f32) -> Self {
        let extension_width = width * extension_fraction;
        let total_width = width + extension_width * 2.0;
        Self {
            extension_width,
            spacing: total_width / (total_points - 1) as f32,
        }
    }

    /// Horizontal position of point `index`
    #[inline]
    pub fn x_at(&self, index: usize) -> f32 {
        index as f32 * self.spacing - self.extension_width
    }
}

/// Reject viewports that cannot hold a surface
pub fn validate_viewport(width: f32, height: f32) -> Result<(), WaterError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(WaterError::invalid(format!("viewport width must be positive, got {width}")));
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(WaterError::invalid(format!("viewport height must be positive, got {height}")));
    }
    Ok(())
}

/// Flat points resting on `level`, evenly spaced and ascending by `x`
pub fn layout_points(layout: &Layout, total_points: usize, level: f32) -> Vec<SurfacePoint> {
    (0..total_points)
        .map(|i| SurfacePoint::at_rest(layout.x_at(i), level))
        .collect()
}

/// Surface height at `x`, interpolated between the two points that bracket it.
///
/// Falls back to `fallback` when no pair brackets `x`.
pub fn height_at_x(points: &[SurfacePoint], x: f32, fallback: f32) -> f32 {
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if x >= a.x && x <= b.x {
            let span = b.x - a.x;
            if span <= 0.0 {
                return a.y;
            }
            return lerp(a.y, b.y, (x - a.x) / span);
        }
    }
    fallback
}

/// Re-fit the surface to a new viewport.
///
/// Level bounds are rescaled to the new height and the rise keeps its
/// progress. The wave shape is discarded: every point comes back to rest on
/// the recomputed level.
pub fn handle_resize(state: &mut SurfaceState, width: f32, height: f32, now: f64) -> Result<(), WaterError> {
    validate_viewport(width, height)?;

    state.viewport_width = width;
    state.viewport_height = height;
    state.start_water_level = height * state.config.start_level_fraction;
    state.end_water_level = height * state.config.end_level_fraction;

    let progress = rise_progress(state, now);
    state.water_level = lerp(state.start_water_level, state.end_water_level, progress);

    let layout = Layout::for_viewport(width, state.total_points(), state.config.extension_fraction);
    state.extension_width = layout.extension_width;
    state.spacing = layout.spacing;
    let level = state.water_level;
    for (i, point) in state.points.iter_mut().enumerate() {
        *point = SurfacePoint::at_rest(layout.x_at(i), level);
    }

    log::info!(
        "Surface resized to {}x{} (progress {:.2}, level {:.1})",
        width,
        height,
        progress,
        level
    );
    Ok(())
}
