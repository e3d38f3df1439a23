//! Waypoint timelines.
//!
//! # Model
//!
//! An entity's movement is a piecewise-linear path through a sequence of
//! `Waypoint`s.  Between two waypoints the entity moves in a straight line at
//! constant speed; before the first and after the last it stands still.
//!
//! Generators append waypoints in time order.  Stored times are strictly
//! increasing: an append at the same time as the last waypoint either
//! coalesces (same position, a hold point that is already there) or
//! replaces it.  An append that goes back in time is an error, and callers
//! treat it as a generator defect.

use crate::{CoreError, CoreResult, Position};

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// One vertex of a movement path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub time: f64,
    pub pos:  Position,
}

impl Waypoint {
    #[inline]
    pub fn new(time: f64, pos: Position) -> Self {
        Self { time, pos }
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

/// Ordered waypoints of a single entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    waypoints: Vec<Waypoint>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// A timeline holding a single waypoint.
    pub fn starting_at(time: f64, pos: Position) -> CoreResult<Self> {
        let mut t = Self::new();
        t.append(time, pos)?;
        Ok(t)
    }

    /// Append a waypoint at `time`.
    ///
    /// # Errors
    ///
    /// `NonMonotonicTime` if `time` is earlier than the last waypoint,
    /// `NonFiniteTime` for NaN or infinite times.
    pub fn append(&mut self, time: f64, pos: Position) -> CoreResult<()> {
        if !time.is_finite() {
            return Err(CoreError::NonFiniteTime(time));
        }
        if let Some(last) = self.waypoints.last_mut() {
            if time < last.time {
                return Err(CoreError::NonMonotonicTime { last: last.time, got: time });
            }
            if time == last.time {
                // A zero-length interval can only carry one position.
                last.pos = pos;
                return Ok(());
            }
        }
        self.waypoints.push(Waypoint { time, pos });
        Ok(())
    }

    /// Position at time `t`, interpolated linearly between the bracketing
    /// waypoints.  Outside the covered span the nearest endpoint is
    /// returned; there is no extrapolation.
    pub fn position_at(&self, t: f64) -> CoreResult<Position> {
        let (first, last) = match (self.waypoints.first(), self.waypoints.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(CoreError::EmptyTimeline),
        };
        if t <= first.time {
            return Ok(first.pos);
        }
        if t >= last.time {
            return Ok(last.pos);
        }

        // First waypoint strictly after `t`; always in 1..len here.
        let hi = self.waypoints.partition_point(|w| w.time <= t);
        let a = &self.waypoints[hi - 1];
        let b = &self.waypoints[hi];
        let fraction = (t - a.time) / (b.time - a.time);
        Ok(a.pos.lerp(b.pos, fraction))
    }

    /// Waypoint times, strictly increasing.  Dependent entities use these
    /// to know when the path they follow changes direction.
    pub fn change_times(&self) -> Vec<f64> {
        self.waypoints.iter().map(|w| w.time).collect()
    }

    /// First change time strictly after `t`, if any.
    pub fn next_change_after(&self, t: f64) -> Option<f64> {
        let i = self.waypoints.partition_point(|w| w.time <= t);
        self.waypoints.get(i).map(|w| w.time)
    }

    #[inline]
    pub fn first_waypoint(&self) -> Option<Waypoint> {
        self.waypoints.first().copied()
    }

    #[inline]
    pub fn last_waypoint(&self) -> Option<Waypoint> {
        self.waypoints.last().copied()
    }

    /// Drop and return the last waypoint.
    #[inline]
    pub fn remove_last(&mut self) -> Option<Waypoint> {
        self.waypoints.pop()
    }

    /// Time between the first and the last waypoint; 0 for fewer than two.
    pub fn duration_covered(&self) -> f64 {
        match (self.waypoints.first(), self.waypoints.last()) {
            (Some(f), Some(l)) => l.time - f.time,
            _ => 0.0,
        }
    }

    #[inline]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Restrict the timeline to the window `[begin, end]` and rebase it so
    /// that `begin` becomes time 0.
    ///
    /// The result starts with the interpolated position at `begin`, keeps
    /// every waypoint strictly inside the window, and, if the original ran
    /// to `end` or beyond, closes with the interpolated position at exactly
    /// `end - begin`.  A timeline that stops short of `end` keeps its last
    /// waypoint as the final one.
    pub fn cut(&self, begin: f64, end: f64) -> CoreResult<Timeline> {
        let mut out = Timeline::starting_at(0.0, self.position_at(begin)?)?;

        for w in self.waypoints.iter().filter(|w| w.time > begin && w.time < end) {
            out.append(w.time - begin, w.pos)?;
        }

        let reaches_end = self.last_waypoint().is_some_and(|l| l.time >= end);
        if reaches_end {
            out.append(end - begin, self.position_at(end)?)?;
        }
        Ok(out)
    }
}
