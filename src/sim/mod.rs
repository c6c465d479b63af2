//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by square ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{ContactSide, collide_with_level, contact_side, overlaps, resolve_pair};
pub use level::Level;
pub use state::{FpsCounter, GameState, Rgb, Square};
pub use tick::{PointerEvent, TickInput, tick};
