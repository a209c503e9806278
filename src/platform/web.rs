//! Browser bindings
//!
//! Exposes one owned surface to JavaScript. The page drives it from its
//! animation frame, resize and click handlers; time comes from `Date.now()`.

use wasm_bindgen::prelude::*;

use super::now_ms;
use crate::renderer::OutlineVertex;
use crate::settings::Tunables;
use crate::sim::{self, SurfaceMode, SurfaceState};

/// Samples per outline segment handed to the page
const FLATTEN_STEPS: usize = 6;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Rising water module loaded");
}

fn to_js(err: crate::WaterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Surface handle owned by the page
#[wasm_bindgen]
pub struct WaterSurface {
    state: SurfaceState,
}

#[wasm_bindgen]
impl WaterSurface {
    /// Create a surface using tunables saved in LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new(total_points: usize, width: f32, height: f32) -> Result<WaterSurface, JsValue> {
        let state = SurfaceState::with_tunables(total_points, width, height, now_ms(), Tunables::load()).map_err(to_js)?;
        Ok(Self { state })
    }

    /// Advance one frame; returns the flattened outline as `[x0, y0, x1, y1, ...]`
    pub fn advance(&mut self) -> Vec<f32> {
        let outline = sim::advance_frame(&mut self.state, now_ms());
        let vertices = outline.to_vertices(FLATTEN_STEPS);
        OutlineVertex::as_floats(&vertices).to_vec()
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        sim::handle_resize(&mut self.state, width, height, now_ms()).map_err(to_js)
    }

    /// Splash at a viewport x coordinate; returns the struck point index
    pub fn click(&mut self, x: f32) -> usize {
        sim::handle_pointer(&mut self.state, x, now_ms())
    }

    pub fn pause(&mut self) {
        sim::pause(&mut self.state, now_ms());
    }

    pub fn resume(&mut self) {
        sim::resume(&mut self.state, now_ms());
    }

    /// Start a new rise lasting `duration_ms`
    pub fn restart(&mut self, duration_ms: f64) {
        self.state.config.animation_duration_ms = duration_ms;
        sim::restart_rise(&mut self.state, now_ms());
    }

    #[wasm_bindgen(getter)]
    pub fn spring_mode(&self) -> bool {
        self.state.mode() == SurfaceMode::Spring
    }

    #[wasm_bindgen(getter)]
    pub fn water_level(&self) -> f32 {
        self.state.water_level()
    }

    pub fn tunables_json(&self) -> Result<String, JsValue> {
        self.state.config.to_json().map_err(to_js)
    }

    /// Replace tunables from JSON and persist them
    pub fn set_tunables_json(&mut self, json: &str) -> Result<(), JsValue> {
        let tunables = Tunables::from_json(json).map_err(to_js)?;
        tunables.save();
        self.state.set_tunables(tunables);
        Ok(())
    }
}
