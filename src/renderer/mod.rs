//! 2D canvas rendering module
//!
//! Thin wrapper over the browser's 2D context: frame and header chrome,
//! the squares, and their score/coordinate text.

pub mod canvas;

pub use canvas::CanvasRenderer;
