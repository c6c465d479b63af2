//! Per-frame simulation step
//!
//! Consumes the frame's pointer input, advances every square under gravity,
//! clamps against the level edges and runs the pairwise collision pass, in
//! that order.

use glam::Vec2;

use super::collision::{collide_with_level, resolve_pair};
use super::state::{FADED_COLOR, GameState, PRESSED_COLOR};

/// A pointer event translated into canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved over the canvas
    Move(Vec2),
    /// Button pressed at a position
    Down(Vec2),
    /// Button released at a position
    Up(Vec2),
    /// Pointer left the canvas
    Leave,
}

/// Input gathered since the previous frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer events in arrival order
    pub pointer: Vec<PointerEvent>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A stalled or backwards clock must not run physics in reverse
    let dt = dt.max(0.0);

    state.time_ticks += 1;
    state.fps.update(dt);

    for event in &input.pointer {
        apply_pointer_event(state, *event);
    }

    // Move squares, time-based, and bounce them off the level edges
    for square in state.squares.iter_mut() {
        square.contact = false;
        square.vel.y += state.tuning.gravity;
        square.pos += square.vel * dt;
        collide_with_level(square, &state.level, &state.tuning);
    }

    // Square-vs-square pass over unordered pairs
    if state.tuning.pair_collisions {
        let tolerance = state.tuning.contact_tolerance;
        for i in 0..state.squares.len() {
            let (head, tail) = state.squares.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                resolve_pair(a, b, tolerance);
            }
        }
    }
}

fn apply_pointer_event(state: &mut GameState, event: PointerEvent) {
    match event {
        PointerEvent::Move(_) => {}
        PointerEvent::Down(pos) => {
            // Every square under the click is credited; overlapping squares
            // can all be hit by one press
            for square in state.squares.iter_mut() {
                if square.contains(pos) {
                    square.score += 1;
                    state.score += 1;
                    square.randomize(&state.level, &state.tuning, &mut state.rng);
                    square.shrink(state.tuning.shrink_factor);
                }
            }
        }
        PointerEvent::Up(_) => {
            for square in state.squares.iter_mut() {
                square.color = PRESSED_COLOR;
            }
        }
        PointerEvent::Leave => {
            for square in state.squares.iter_mut() {
                square.color = FADED_COLOR;
            }
        }
    }
}
