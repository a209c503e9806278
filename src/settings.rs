//! Surface tunables
//!
//! One flat record the host reads and writes between frames. Values are not
//! range-checked: a `damping` of 1.0 or more simply never settles.

use serde::{Deserialize, Serialize};

use crate::error::WaterError;
use crate::sim::ModePolicy;

/// Physics, ambient and animation parameters of a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    // === Spring physics ===
    /// Pull of each point back toward the water level per frame
    pub spring_stiffness: f32,
    /// Velocity kept per frame (0 < damping < 1 to settle)
    pub damping: f32,
    /// Coupling toward the neighbour average (wave propagation)
    pub neighbor_spread: f32,

    // === Splash ===
    /// Peak displacement of a splash at the clicked point (px)
    pub splash_force: f32,
    /// Index distance reached by a splash
    pub splash_radius: usize,
    /// Exponential falloff per index of distance
    pub splash_decay: f32,
    /// Width of the uniform jitter band centred on 1.0
    pub splash_jitter: f32,
    /// Share of the splash displacement also added as velocity
    pub impulse_fraction: f32,
    /// Time spent in spring mode after the last splash (ms)
    pub impulse_mode_duration_ms: f64,
    /// Seed of the splash jitter generator
    pub jitter_seed: u64,

    // === Ambient waves ===
    /// Peak ambient displacement (px)
    pub ambient_amplitude: f32,
    /// Phase advance per ambient frame
    pub ambient_speed: f32,
    /// Fraction of the gap to the ambient target closed per frame
    pub responsiveness: f32,

    // === Outline ===
    /// Catmull-Rom parameterisation (0 uniform, 0.5 centripetal, 1 chordal)
    pub mesh_smoothing_factor: f32,

    // === Rising level ===
    /// Time for the level to rise from start to end (ms)
    pub animation_duration_ms: f64,
    /// Starting level as a fraction of the viewport height from the top
    pub start_level_fraction: f32,
    /// Final level as a fraction of the viewport height from the top
    pub end_level_fraction: f32,
    /// Off-screen margin on each side as a fraction of the viewport width
    pub extension_fraction: f32,

    /// How the surface chooses between spring and ambient motion
    pub mode_policy: ModePolicy,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            spring_stiffness: 0.018,
            damping: 0.985,
            neighbor_spread: 0.025,

            splash_force: 15.0,
            splash_radius: 12,
            splash_decay: 0.3,
            splash_jitter: 0.2,
            impulse_fraction: 0.3,
            impulse_mode_duration_ms: 3000.0,
            jitter_seed: 0x5EA_5EA,

            ambient_amplitude: 35.0,
            ambient_speed: 0.049,
            responsiveness: 0.05,

            mesh_smoothing_factor: 0.5,

            // Rise over 10 seconds, from near the bottom to nearly full
            animation_duration_ms: 10_000.0,
            start_level_fraction: 0.95,
            end_level_fraction: 0.02,
            extension_fraction: 0.2,

            mode_policy: ModePolicy::Timeout,
        }
    }
}

impl Tunables {
    /// Parse tunables from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, WaterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize tunables to compact JSON
    pub fn to_json(&self) -> Result<String, WaterError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Inclusive bounds of the splash jitter multiplier
    pub fn jitter_band(&self) -> (f32, f32) {
        let half = self.splash_jitter.abs() / 2.0;
        (1.0 - half, 1.0 + half)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rising_water_tunables";

    /// Load tunables from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tunables) = Self::from_json(&json) {
                    log::info!("Loaded tunables from LocalStorage");
                    return tunables;
                }
            }
        }

        log::info!("Using default tunables");
        Self::default()
    }

    /// Save tunables to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tunables saved");
            }
        }
    }

    /// Load tunables from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, WaterError> {
        let json = std::fs::read_to_string(path)?;
        let tunables = Self::from_json(&json)?;
        log::info!("Loaded tunables from {}", path.display());
        Ok(tunables)
    }

    /// Write tunables to a JSON file (pretty-printed)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), WaterError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Tunables saved to {}", path.display());
        Ok(())
    }
}
