//! Collision detection and response for squares
//!
//! Two flavors: clamping against the level's four edges (with restitution
//! and floor friction), and the approximate square-vs-square resolver.

use super::level::Level;
use super::state::Square;
use crate::tuning::Tuning;

/// Clamp a square against the level's four edges
///
/// Crossing an edge snaps the square back onto the boundary and reflects
/// that speed component through the restitution multiplier. The x and y
/// axes are checked independently, so a corner hit corrects both in the
/// same frame. Bottom-edge contact also damps horizontal speed.
pub fn collide_with_level(square: &mut Square, level: &Level, tuning: &Tuning) {
    if square.pos.x <= level.x {
        // Left edge
        square.pos.x = level.x;
        square.vel.x = -square.vel.x * tuning.wall_restitution;
    } else if square.right() >= level.right() {
        // Right edge
        square.vel.x = -square.vel.x * tuning.wall_restitution;
        square.pos.x = level.right() - square.size.x;
    }

    if square.pos.y <= level.y {
        // Top edge
        square.pos.y = level.y;
        square.vel.y = -square.vel.y * tuning.wall_restitution;
    } else if square.bottom() >= level.bottom() {
        // Bottom edge, with floor friction
        square.vel.y = -square.vel.y * tuning.wall_restitution;
        square.pos.y = level.bottom() - square.size.y;
        square.vel.x *= tuning.floor_friction;
    }
}

/// Axis-aligned overlap test
pub fn overlaps(a: &Square, b: &Square) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

/// Which side of the first square touches the second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSide {
    Left,
    Above,
    Right,
    Below,
}

/// Find the side of `a` within `tolerance` px of the facing edge of `b`
///
/// Checked in fixed priority order (left-of, above, right-of, below); the
/// first match wins. A deep overlap can match nothing.
pub fn contact_side(a: &Square, b: &Square, tolerance: f32) -> Option<ContactSide> {
    if (a.right() - b.pos.x).abs() <= tolerance {
        Some(ContactSide::Left)
    } else if (a.bottom() - b.pos.y).abs() <= tolerance {
        Some(ContactSide::Above)
    } else if (a.pos.x - b.right()).abs() <= tolerance {
        Some(ContactSide::Right)
    } else if (a.pos.y - b.bottom()).abs() <= tolerance {
        Some(ContactSide::Below)
    } else {
        None
    }
}

/// Resolve one overlapping pair
///
/// Flags both squares for the highlight frame and flips the velocity axis
/// matching the contact side on both. No momentum transfer and no
/// penetration correction; overlapped squares can stay stuck for a few
/// frames.
pub fn resolve_pair(a: &mut Square, b: &mut Square, tolerance: f32) {
    if !overlaps(a, b) {
        return;
    }

    a.contact = true;
    b.contact = true;

    match contact_side(a, b, tolerance) {
        Some(ContactSide::Left | ContactSide::Right) => {
            a.vel.x = -a.vel.x;
            b.vel.x = -b.vel.x;
        }
        Some(ContactSide::Above | ContactSide::Below) => {
            a.vel.y = -a.vel.y;
            b.vel.y = -b.vel.y;
        }
        None => {}
    }
}
