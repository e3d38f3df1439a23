//! Random Direction: walk straight to a wall, turn away, repeat.
//!
//! Each entity picks a heading and a speed, travels until it reaches the
//! boundary of the area, optionally pauses there, then picks a new heading
//! from a fixed range that points back into the area.  The new heading is
//! *not* a mirror reflection: each wall and each corner has its own range,
//! half a turn wide for walls and a quarter turn for corners.
//!
//! ```text
//!   (0,h) ┌──── top: [π, 2π) ────┐ (w,h)
//!         │                      │
//!   left: │                      │ right:
//!  [3π/2, │                      │ [π/2, 3π/2)
//!   π/2)  │                      │
//!   (0,0) └─── bottom: [0, π) ───┘ (w,0)
//! ```
//!
//! Every waypoint after an entity's first lies exactly on the boundary
//! (before post-generation trims the window).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use mob_core::{Position, ScenarioConfig, Timeline};

use crate::framework::{Sampler, travel_time};
use crate::{ModelError, ModelResult};

const THREE_HALVES_PI: f64 = 3.0 * FRAC_PI_2;

/// Parameters specific to the Random Direction model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomDirectionParams {
    /// Lower bound of pause lengths; the upper bound is
    /// `ScenarioConfig::max_pause`.
    pub min_pause: f64,
}

impl Default for RandomDirectionParams {
    fn default() -> Self {
        Self { min_pause: 0.0 }
    }
}

impl RandomDirectionParams {
    pub fn validate(&self, config: &ScenarioConfig) -> ModelResult<()> {
        if !(self.min_pause.is_finite() && self.min_pause >= 0.0) || self.min_pause > config.max_pause {
            return Err(ModelError::InvalidConfig(format!(
                "min pause {} must lie in [0, max pause {}]",
                self.min_pause, config.max_pause
            )));
        }
        Ok(())
    }
}

// ── Boundary contact ──────────────────────────────────────────────────────────

/// The quadrant a heading points into, counter-clockwise from +x.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quadrant {
    UpRight,
    UpLeft,
    DownLeft,
    DownRight,
}

impl Quadrant {
    fn of(angle: f64) -> ModelResult<Quadrant> {
        if (0.0..FRAC_PI_2).contains(&angle) {
            Ok(Quadrant::UpRight)
        } else if (FRAC_PI_2..PI).contains(&angle) {
            Ok(Quadrant::UpLeft)
        } else if (PI..THREE_HALVES_PI).contains(&angle) {
            Ok(Quadrant::DownLeft)
        } else if (THREE_HALVES_PI..TAU).contains(&angle) {
            Ok(Quadrant::DownRight)
        } else {
            Err(ModelError::UnclassifiedHeading(angle))
        }
    }
}

/// Where on the boundary a segment ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Contact {
    Right,
    Left,
    Top,
    Bottom,
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Contact {
    /// `(start, width)` of the heading range drawn after this contact.
    fn heading_range(self) -> (f64, f64) {
        match self {
            Contact::Right       => (FRAC_PI_2, PI),
            Contact::Left        => (THREE_HALVES_PI, PI),
            Contact::Top         => (PI, PI),
            Contact::Bottom      => (0.0, PI),
            Contact::TopRight    => (PI, FRAC_PI_2),
            Contact::TopLeft     => (THREE_HALVES_PI, FRAC_PI_2),
            Contact::BottomLeft  => (0.0, FRAC_PI_2),
            Contact::BottomRight => (FRAC_PI_2, FRAC_PI_2),
        }
    }

    /// New heading for uniform draw `u`, wrapped into `[0, 2π)`.
    pub(crate) fn next_heading(self, u: f64) -> f64 {
        let (start, width) = self.heading_range();
        (u * width + start).rem_euclid(TAU)
    }
}

/// Time to close `gap` at signed velocity `velocity`.  Walls behind the
/// entity, or along an axis it does not move on, are never reached.
fn wall_time(gap: f64, velocity: f64) -> f64 {
    let t = gap / velocity;
    if t.is_nan() || t < 0.0 { f64::INFINITY } else { t }
}

/// The first boundary point hit travelling from `src` along `angle`.
pub(crate) fn first_contact(
    src:    Position,
    angle:  f64,
    speed:  f64,
    width:  f64,
    height: f64,
) -> ModelResult<(Position, Contact)> {
    let quadrant = Quadrant::of(angle)?;
    let (wall_x, wall_y) = match quadrant {
        Quadrant::UpRight   => (width, height),
        Quadrant::UpLeft    => (0.0, height),
        Quadrant::DownLeft  => (0.0, 0.0),
        Quadrant::DownRight => (width, 0.0),
    };
    let (sin, cos) = angle.sin_cos();
    let x_time = wall_time(wall_x - src.x, speed * cos);
    let y_time = wall_time(wall_y - src.y, speed * sin);

    let hit = if x_time < y_time {
        let contact = if wall_x > 0.0 { Contact::Right } else { Contact::Left };
        (Position::new(wall_x, speed * x_time * sin + src.y), contact)
    } else if y_time < x_time {
        let contact = if wall_y > 0.0 { Contact::Top } else { Contact::Bottom };
        (Position::new(speed * y_time * cos + src.x, wall_y), contact)
    } else {
        let contact = match quadrant {
            Quadrant::UpRight   => Contact::TopRight,
            Quadrant::UpLeft    => Contact::TopLeft,
            Quadrant::DownLeft  => Contact::BottomLeft,
            Quadrant::DownRight => Contact::BottomRight,
        };
        (Position::new(wall_x, wall_y), contact)
    };
    Ok(hit)
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// Generate one entity's timeline over `[0, horizon]`.
///
/// `start` overrides the random initial position (scenario chaining).
pub fn generate_entity(
    params:  &RandomDirectionParams,
    sampler: &mut Sampler<'_>,
    horizon: f64,
    start:   Option<Position>,
) -> ModelResult<Timeline> {
    let (width, height, max_pause) = {
        let c = sampler.config();
        (c.width, c.height, c.max_pause)
    };

    let mut src = match start {
        Some(p) => p,
        None => sampler.random_position(),
    };
    let mut angle = sampler.random_heading();
    let mut timeline = Timeline::new();
    let mut t = 0.0;

    while t < horizon {
        // After a pause this records where the entity waited.
        timeline.append(t, src)?;

        let speed = sampler.random_speed();
        let (dst, contact) = first_contact(src, angle, speed, width, height)?;
        angle = contact.next_heading(sampler.random_uniform());

        t += travel_time(src.distance(dst), speed);
        timeline.append(t, dst)?;

        if t < horizon && max_pause > 0.0 {
            t += sampler.random_pause(params.min_pause, max_pause);
        }
        src = dst;
    }

    Ok(timeline)
}
