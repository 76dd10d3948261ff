//! Rendering module
//!
//! `shapes` builds a draw list from game state; `canvas` replays it on a
//! browser Canvas 2D context.

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use shapes::{DrawCommand, frame};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
