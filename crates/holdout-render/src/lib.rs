//! Renderer for HOLDOUT.
//!
//! Turns `GameStateSnapshot`s into a `Scene` of 2D draw commands using the
//! perspective projection from `holdout-core`. Presenting the scene on an
//! actual surface is left to the host.

pub mod backdrop;
pub mod renderer;
pub mod scene;

pub use backdrop::Backdrop;
pub use renderer::Renderer;
pub use scene::{DrawCommand, Scene};
