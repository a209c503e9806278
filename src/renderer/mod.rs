//! Outline module
//!
//! Turns surface points into a smoothed closed outline for the host to fill.

pub mod outline;
pub mod vertex;

pub use outline::{Outline, OutlineSegment, build_outline, outline_polyline, smooth_closed};
pub use vertex::OutlineVertex;
