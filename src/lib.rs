//! Bouncy Box - squares under gravity in a bordered canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: 2D canvas rendering (wasm only)
//! - `tuning`: Data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Layout constants shared by the level derivation and the renderer
pub mod consts {
    /// Height of the header band across the top of the canvas (px)
    pub const HEADER_HEIGHT: f32 = 65.0;
    /// Width of the frame border around the playable area (px)
    pub const BORDER_WIDTH: f32 = 1.0;
    /// Edge length of a freshly spawned square (px)
    pub const SQUARE_START_SIZE: f32 = 100.0;
    /// Accumulated frame time between FPS readout refreshes (seconds)
    pub const FPS_WINDOW: f32 = 0.25;
}
