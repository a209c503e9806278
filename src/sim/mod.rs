//! Surface simulation module
//!
//! All surface behaviour lives here. One `SurfaceState` is owned by the
//! host and every entry point borrows it mutably:
//! - Single-threaded, frame-driven, no global lookup
//! - Time is passed in (milliseconds), never read from the clock
//! - No rendering or platform dependencies

pub mod ambient;
pub mod geometry;
pub mod level;
pub mod mode;
pub mod splash;
pub mod spring;
pub mod state;
pub mod tick;

pub use ambient::{ambient_target, ambient_wave, step_ambient};
pub use geometry::{Layout, handle_resize, height_at_x};
pub use level::{pause, progress_at, restart_rise, resume, rise_progress};
pub use mode::{ModePolicy, SurfaceMode, interaction_energy};
pub use splash::{handle_pointer, nearest_index, splash_falloff};
pub use spring::step_spring;
pub use state::{SurfacePoint, SurfaceState};
pub use tick::advance_frame;
