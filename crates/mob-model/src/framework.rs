//! The parameter framework shared by every mobility model.
//!
//! # Generation lifecycle
//!
//! ```text
//! pre_generation(config)          validate, compute the generation window
//!   for each unit:
//!     Sampler::for_unit(..)       independent RNG substream
//!     model-specific walk         appends waypoints on [0, horizon]
//! post_generation(timelines)      cut every timeline to [ignore, horizon],
//!                                 rebased so the trace starts at 0
//! ```
//!
//! Models generate over the full horizon (`ignore + duration`) so that the
//! delivered window starts from a state that has forgotten the initial
//! placement.

use std::f64::consts::TAU;

use mob_core::{Position, ScenarioConfig, Timeline, UnitRng};
use tracing::warn;

use crate::ModelResult;

/// Warm-up below this many seconds leaves start-up bias in the trace.
pub const SHORT_WARMUP_SECS: f64 = 600.0;

/// The time window a generation run covers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GenerationWindow {
    /// Seconds discarded from the front of every timeline.
    pub ignore:   f64,
    /// Seconds delivered after the warm-up.
    pub duration: f64,
}

impl GenerationWindow {
    /// Generators run until their clock reaches this time.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.ignore + self.duration
    }
}

/// Validate `config` and open the generation window.
///
/// `chained` suppresses the short-warm-up warning: a scenario that starts
/// from a predecessor's final positions has no start-up bias to shed.
pub fn pre_generation(config: &ScenarioConfig, chained: bool) -> ModelResult<GenerationWindow> {
    config.validate()?;
    if config.ignore < SHORT_WARMUP_SECS && !chained {
        warn!(
            ignore = config.ignore,
            threshold = SHORT_WARMUP_SECS,
            "short warm-up; the trace may keep the bias of the initial placement"
        );
    }
    Ok(GenerationWindow { ignore: config.ignore, duration: config.duration })
}

/// Drop the warm-up prefix of every timeline, rebase times to 0, and clip
/// anything past the nominal duration to an interpolated waypoint at
/// exactly `duration`.
pub fn post_generation<'t>(
    timelines: impl IntoIterator<Item = &'t mut Timeline>,
    window:    &GenerationWindow,
) -> ModelResult<()> {
    for timeline in timelines {
        *timeline = timeline.cut(window.ignore, window.horizon())?;
    }
    Ok(())
}

// ── Sampler ───────────────────────────────────────────────────────────────────

/// Random draws for one generation unit, expressed in scenario terms.
///
/// Every model draws through a `Sampler`, never through a shared RNG, so a
/// unit's waypoints depend only on the seed, the unit index, and the
/// parameters.
pub struct Sampler<'a> {
    config: &'a ScenarioConfig,
    rng:    UnitRng,
}

impl<'a> Sampler<'a> {
    /// The sampler for unit `unit` of a scenario.
    pub fn for_unit(config: &'a ScenarioConfig, unit: usize) -> Self {
        Self {
            config,
            rng: UnitRng::for_unit(config.seed, unit as u64),
        }
    }

    #[inline]
    pub fn config(&self) -> &ScenarioConfig {
        self.config
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn random_uniform(&mut self) -> f64 {
        self.rng.uniform()
    }

    /// Uniform point in `[0, width) × [0, height)`.
    pub fn random_position(&mut self) -> Position {
        let x = self.config.width * self.rng.uniform();
        let y = self.config.height * self.rng.uniform();
        Position::new(x, y)
    }

    /// Uniform point at least `margin` away from every edge.
    pub fn random_inset_position(&mut self, margin: f64) -> Position {
        let x = (self.config.width - 2.0 * margin) * self.rng.uniform() + margin;
        let y = (self.config.height - 2.0 * margin) * self.rng.uniform() + margin;
        Position::new(x, y)
    }

    /// Speed drawn from `[min_speed, max_speed]`.
    #[inline]
    pub fn random_speed(&mut self) -> f64 {
        self.rng.uniform_between(self.config.min_speed, self.config.max_speed)
    }

    /// Heading in `[0, 2π)`.
    #[inline]
    pub fn random_heading(&mut self) -> f64 {
        self.rng.uniform() * TAU
    }

    /// Pause drawn from `[min_pause, max_pause]`.
    #[inline]
    pub fn random_pause(&mut self, min_pause: f64, max_pause: f64) -> f64 {
        self.rng.uniform_between(min_pause, max_pause)
    }
}

/// Seconds needed to cover `distance` at `speed`.  A zero-length segment
/// takes no time, whatever the speed.
#[inline]
pub(crate) fn travel_time(distance: f64, speed: f64) -> f64 {
    if distance == 0.0 { 0.0 } else { distance / speed }
}
