//! Scenario-wide configuration.

use crate::{CoreError, CoreResult};

/// Parameters shared by every mobility model.
///
/// Model-specific settings (group count, minimum pause, …) live in the
/// model's own parameter struct in `mob-model`; this struct is passed to
/// every generator by reference and never mutated during generation.
///
/// Typically loaded from a JSON file by the application (with the `serde`
/// feature) and handed to `mob_synth::SynthBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    /// Number of entities to generate.
    pub entity_count: usize,

    /// Area width in metres.
    pub width: f64,

    /// Area height in metres.
    pub height: f64,

    /// Length of the delivered trace in seconds.
    pub duration: f64,

    /// Warm-up seconds generated and then discarded from the front of every
    /// timeline.
    pub ignore: f64,

    /// Master RNG seed.  The same seed always produces identical traces.
    pub seed: u64,

    /// Speed range in m/s; each travel segment draws uniformly from it.
    pub min_speed: f64,
    pub max_speed: f64,

    /// Upper bound of pause lengths in seconds.  `0` disables pausing.
    pub max_pause: f64,

    /// Worker thread count for parallel generation.  `None` uses Rayon's
    /// global pool.  Has no effect on the output.
    pub num_threads: Option<usize>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            entity_count: 0,
            width:        200.0,
            height:       200.0,
            duration:     600.0,
            ignore:       3600.0,
            seed:         0,
            min_speed:    0.5,
            max_speed:    1.5,
            max_pause:    60.0,
            num_threads:  None,
        }
    }
}

impl ScenarioConfig {
    /// Total simulated time: warm-up plus the delivered duration.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.duration + self.ignore
    }

    /// Check the shared parameters for values no model can work with.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(CoreError::Config(format!(
                "area must be positive and finite, got {} x {}",
                self.width, self.height
            )));
        }
        if !positive(self.duration) {
            return Err(CoreError::Config(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        if !non_negative(self.ignore) {
            return Err(CoreError::Config(format!(
                "warm-up must be non-negative, got {}",
                self.ignore
            )));
        }
        if !non_negative(self.min_speed) || !positive(self.max_speed) || self.min_speed > self.max_speed {
            return Err(CoreError::Config(format!(
                "speed range [{}, {}] is invalid",
                self.min_speed, self.max_speed
            )));
        }
        if !non_negative(self.max_pause) {
            return Err(CoreError::Config(format!(
                "max pause must be non-negative, got {}",
                self.max_pause
            )));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
