//! Rising Water entry point
//!
//! Native builds run a headless scripted session at 60 fps and log what the
//! surface does. The browser build is driven through `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Rising Water (native) starting...");

    // Optional tunables file as the only argument
    let tunables = match std::env::args().nth(1) {
        Some(path) => match rising_water::Tunables::load_from(std::path::Path::new(&path)) {
            Ok(t) => t,
            Err(e) => {
                log::error!("Could not load tunables: {}", e);
                std::process::exit(1);
            }
        },
        None => rising_water::Tunables::default(),
    };

    if let Err(e) = headless::run(tunables) {
        log::error!("Session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rising_water::consts::{DEFAULT_TOTAL_POINTS, FRAME_MS};
    use rising_water::sim::{self, SurfaceState};
    use rising_water::{Tunables, WaterError};

    /// Scripted events, keyed by frame number
    enum Event {
        Splash(f32),
        Resize(f32, f32),
        Pause,
        Resume,
    }

    const SCRIPT: &[(u32, Event)] = &[
        (120, Event::Splash(400.0)),
        (150, Event::Splash(120.0)),
        (360, Event::Resize(1200.0, 900.0)),
        (420, Event::Pause),
        (540, Event::Resume),
        (600, Event::Splash(1100.0)),
    ];

    const TOTAL_FRAMES: u32 = 900;

    pub fn run(tunables: Tunables) -> Result<(), WaterError> {
        let mut now = 0.0;
        let mut state = SurfaceState::with_tunables(DEFAULT_TOTAL_POINTS, 800.0, 600.0, now, tunables)?;

        for frame in 1..=TOTAL_FRAMES {
            now = frame as f64 * FRAME_MS;

            for (_, event) in SCRIPT.iter().filter(|(f, _)| *f == frame) {
                match *event {
                    Event::Splash(x) => {
                        sim::handle_pointer(&mut state, x, now);
                    }
                    Event::Resize(w, h) => sim::handle_resize(&mut state, w, h, now)?,
                    Event::Pause => sim::pause(&mut state, now),
                    Event::Resume => sim::resume(&mut state, now),
                }
            }

            let outline = sim::advance_frame(&mut state, now);

            if frame % 60 == 0 {
                log::info!(
                    "t={:>5.1}s mode={:?} level={:>6.1} progress={:.2} deviation={:>5.2} outline={} segments",
                    now / 1000.0,
                    state.mode(),
                    state.water_level(),
                    sim::rise_progress(&state, now),
                    state.max_deviation(),
                    outline.segments.len()
                );
            }
        }

        println!(
            "Finished {} frames: level {:.1} of {:.0}px viewport",
            TOTAL_FRAMES,
            state.water_level(),
            state.viewport_height()
        );
        Ok(())
    }
}
