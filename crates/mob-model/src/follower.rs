//! Dependent entities that trail a reference timeline.
//!
//! A follower never looks further ahead than the next time its reference
//! changes.  For each step it aims at a random point within `max_dist` of
//! where the reference will be at that time.  If the aim is too far to
//! reach at `max_speed` it travels only part of the way (a *blended*
//! step).
//!
//! Waypoint times never decrease: a step always ends at or before the
//! reference change it aims for, and pauses are cut short at that change.

use mob_core::{Position, Timeline};

use crate::ModelResult;
use crate::framework::{Sampler, travel_time};

/// One step of a follower walk, as seen by tests and diagnostics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FollowerStep {
    /// Reference change time the step aims for.
    pub aim_time:      f64,
    /// Proximity sample around the reference position at `aim_time`.
    pub target:        Position,
    /// When the follower reaches `waypoint`.
    pub waypoint_time: f64,
    /// Where the step ends: `target`, or a point on the way to it.
    pub waypoint:      Position,
    /// `true` if the target was out of reach and the step stopped short.
    pub blended:       bool,
}

/// A follower walking behind one reference timeline.
pub struct FollowerWalk<'r> {
    reference: &'r Timeline,
    max_dist:  f64,
    horizon:   f64,
    timeline:  Timeline,
    clock:     f64,
    src:       Position,
}

impl<'r> FollowerWalk<'r> {
    /// Place the follower near the reference's position at time 0.
    pub fn start(
        reference: &'r Timeline,
        max_dist:  f64,
        horizon:   f64,
        sampler:   &mut Sampler<'_>,
    ) -> ModelResult<Self> {
        let (width, height) = (sampler.config().width, sampler.config().height);
        let src = reference
            .position_at(0.0)?
            .random_offset(max_dist, sampler.random_uniform(), sampler.random_uniform())
            .clamp_to(width, height);
        Ok(Self {
            reference,
            max_dist,
            horizon,
            timeline: Timeline::starting_at(0.0, src)?,
            clock: 0.0,
            src,
        })
    }

    /// `true` once the follower's clock has reached the horizon.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.clock >= self.horizon
    }

    /// The follower's own clock.
    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Advance by one step.  Returns `None` once the horizon is reached.
    pub fn step(&mut self, sampler: &mut Sampler<'_>) -> ModelResult<Option<FollowerStep>> {
        if self.is_done() {
            return Ok(None);
        }
        let (width, height, max_speed, max_pause) = {
            let c = sampler.config();
            (c.width, c.height, c.max_speed, c.max_pause)
        };

        let t = self.clock;
        let next = self
            .reference
            .next_change_after(t)
            .filter(|&c| c < self.horizon)
            .unwrap_or(self.horizon);
        let window = next - t;

        let target = self
            .reference
            .position_at(next)?
            .random_offset(self.max_dist, sampler.random_uniform(), sampler.random_uniform())
            .clamp_to(width, height);

        let required = self.src.distance(target) / window;
        let blended = required > max_speed;
        let waypoint = if blended {
            let speed = sampler.random_speed();
            self.src.lerp(target, speed / required)
        } else {
            target
        };

        let arrival = if blended && max_pause == 0.0 {
            // The reference does not wait, so neither does the follower.
            next
        } else {
            let distance = self.src.distance(waypoint);
            let speed = sampler.random_speed().max(distance / window);
            let arrival = (t + travel_time(distance, speed)).min(next);
            // Nowhere to go: hold until the reference moves on.
            if arrival <= t { next } else { arrival }
        };
        self.timeline.append(arrival, waypoint)?;
        self.clock = arrival;

        if self.clock < self.horizon && max_pause > 0.0 {
            let pause = max_pause * sampler.random_uniform();
            if pause > 0.0 {
                self.clock = (self.clock + pause).min(next);
                self.timeline.append(self.clock, waypoint)?;
            }
        }
        self.src = waypoint;

        Ok(Some(FollowerStep {
            aim_time: next,
            target,
            waypoint_time: arrival,
            waypoint,
            blended,
        }))
    }

    /// Walk to the horizon and return the finished timeline.
    pub fn run(mut self, sampler: &mut Sampler<'_>) -> ModelResult<Timeline> {
        while self.step(sampler)?.is_some() {}
        Ok(self.timeline)
    }

    /// The timeline walked so far.
    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
