//! Scene data and per-frame math for the spinning crate.

pub mod loader;
pub mod meshing;
pub mod transform;
