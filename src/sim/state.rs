//! Surface state and core simulation types
//!
//! The host owns one `SurfaceState` and passes it into every entry point.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Layout, layout_points, validate_viewport};
use super::mode::SurfaceMode;
use crate::error::WaterError;
use crate::settings::Tunables;

/// One sample of the liquid height along the horizontal axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Horizontal position (only changes on resize)
    pub x: f32,
    /// Current height, pixels from the top
    pub y: f32,
    /// Height at the end of the previous frame
    pub previous_y: f32,
    /// Vertical velocity (px/frame), kept across mode switches
    pub velocity: f32,
}

impl SurfacePoint {
    /// A point resting flat on the given level
    pub fn at_rest(x: f32, level: f32) -> Self {
        Self {
            x,
            y: level,
            previous_y: level,
            velocity: 0.0,
        }
    }

    /// Signed distance from the given level (positive = below it)
    #[inline]
    pub fn displacement(&self, level: f32) -> f32 {
        self.y - level
    }
}

/// The whole surface: points, viewport geometry, rising level and clocks
#[derive(Debug, Clone)]
pub struct SurfaceState {
    /// Tunables, freely writable between frames
    pub config: Tunables,

    total_points: usize,
    pub(crate) points: Vec<SurfacePoint>,

    pub(crate) viewport_width: f32,
    pub(crate) viewport_height: f32,
    pub(crate) extension_width: f32,
    pub(crate) spacing: f32,

    pub(crate) water_level: f32,
    pub(crate) start_water_level: f32,
    pub(crate) end_water_level: f32,
    /// Anchor of the rise animation (ms)
    pub(crate) animation_start_time: f64,
    /// Anchor of the spring mode window (ms); `None` until the first splash
    pub(crate) last_impulse_time: Option<f64>,

    /// Advances only in ambient frames; consumed through sin, so never wrapped
    pub(crate) ambient_phase: f64,
    /// Mode used by the most recent advanced frame
    pub(crate) mode: SurfaceMode,

    pub(crate) paused_at: Option<f64>,
    pub(crate) rng: Pcg32,
}

impl SurfaceState {
    /// Create a surface with default tunables, starting its rise at `now`
    pub fn new(total_points: usize, width: f32, height: f32, now: f64) -> Result<Self, WaterError> {
        Self::with_tunables(total_points, width, height, now, Tunables::default())
    }

    /// Create a surface with the given tunables, starting its rise at `now`
    pub fn with_tunables(
        total_points: usize,
        width: f32,
        height: f32,
        now: f64,
        config: Tunables,
    ) -> Result<Self, WaterError> {
        if total_points < 2 {
            return Err(WaterError::invalid(format!(
                "total_points must be at least 2, got {total_points}"
            )));
        }
        validate_viewport(width, height)?;

        let layout = Layout::for_viewport(width, total_points, config.extension_fraction);
        let start_water_level = height * config.start_level_fraction;
        let end_water_level = height * config.end_level_fraction;
        let points = layout_points(&layout, total_points, start_water_level);
        let rng = Pcg32::seed_from_u64(config.jitter_seed);

        log::info!(
            "Surface created: {} points, {}x{}, level {} -> {}",
            total_points,
            width,
            height,
            start_water_level,
            end_water_level
        );

        Ok(Self {
            config,
            total_points,
            points,
            viewport_width: width,
            viewport_height: height,
            extension_width: layout.extension_width,
            spacing: layout.spacing,
            water_level: start_water_level,
            start_water_level,
            end_water_level,
            animation_start_time: now,
            last_impulse_time: None,
            ambient_phase: 0.0,
            mode: SurfaceMode::Ambient,
            paused_at: None,
            rng,
        })
    }

    /// Replace all tunables at once (reseeds the splash jitter if the seed changed)
    pub fn set_tunables(&mut self, config: Tunables) {
        if config.jitter_seed != self.config.jitter_seed {
            self.rng = Pcg32::seed_from_u64(config.jitter_seed);
        }
        self.config = config;
    }

    pub fn total_points(&self) -> usize {
        self.total_points
    }

    /// Surface points, ascending by `x`
    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Off-screen margin on each side of the viewport
    pub fn extension_width(&self) -> f32 {
        self.extension_width
    }

    /// Horizontal distance between adjacent points
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Current equilibrium line, pixels from the top
    pub fn water_level(&self) -> f32 {
        self.water_level
    }

    pub fn start_water_level(&self) -> f32 {
        self.start_water_level
    }

    pub fn end_water_level(&self) -> f32 {
        self.end_water_level
    }

    pub fn animation_start_time(&self) -> f64 {
        self.animation_start_time
    }

    pub fn last_impulse_time(&self) -> Option<f64> {
        self.last_impulse_time
    }

    pub fn ambient_phase(&self) -> f64 {
        self.ambient_phase
    }

    /// Mode used by the most recent advanced frame
    pub fn mode(&self) -> SurfaceMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn paused_at(&self) -> Option<f64> {
        self.paused_at
    }

    /// Largest `|y - water_level|` over all points
    pub fn max_deviation(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.displacement(self.water_level).abs())
            .fold(0.0, f32::max)
    }
}
