//! Planar coordinates.
//!
//! Scenario space is a flat rectangle `[0, width] × [0, height]` in metres.
//! `Position` is `f64` throughout: waypoint times accumulate thousands of
//! segment lengths and `f32` drift would break the on-the-wall guarantees of
//! the Random Direction model.

use std::f64::consts::TAU;

/// A point in the simulation area.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// A point within `max_dist` of `self`.
    ///
    /// `u_dist` and `u_dir` are two independent uniform draws in `[0, 1)`:
    /// the first scales the radius, the second picks the direction.  The
    /// radius is linear in `u_dist`, so samples concentrate near the centre.
    pub fn random_offset(self, max_dist: f64, u_dist: f64, u_dir: f64) -> Position {
        let dist = u_dist * max_dist;
        let dir = u_dir * TAU;
        Position {
            x: self.x + dir.cos() * dist,
            y: self.y + dir.sin() * dist,
        }
    }

    /// Linear blend: `fraction = 0` is `self`, `1` is `other`.
    #[inline]
    pub fn lerp(self, other: Position, fraction: f64) -> Position {
        Position {
            x: self.x + (other.x - self.x) * fraction,
            y: self.y + (other.y - self.y) * fraction,
        }
    }

    /// Offset by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: f64, dy: f64) -> Position {
        Position { x: self.x + dx, y: self.y + dy }
    }

    /// Clamp each coordinate into `[0, width] × [0, height]`.
    #[inline]
    pub fn clamp_to(self, width: f64, height: f64) -> Position {
        Position {
            x: self.x.clamp(0.0, width),
            y: self.y.clamp(0.0, height),
        }
    }

    /// `true` if the point lies in the closed rectangle, with slack `eps`.
    #[inline]
    pub fn within(self, width: f64, height: f64, eps: f64) -> bool {
        self.x >= -eps && self.x <= width + eps && self.y >= -eps && self.y <= height + eps
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
