//! Synthesis observer trait for progress reporting and data collection.

use mob_model::{Scenario, UnitOutput};
use tracing::{debug, info};

/// Callbacks invoked by [`Synth::run`][crate::Synth::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Counter { units: usize }
///
/// impl SynthObserver for Counter {
///     fn on_unit_complete(&mut self, _unit: usize, _output: &UnitOutput) {
///         self.units += 1;
///     }
/// }
/// ```
pub trait SynthObserver {
    /// Called once after validation, before any unit is generated.
    fn on_generation_start(&mut self, _model: &str, _units: usize, _horizon: f64) {}

    /// Called once per unit, in ascending unit order, with the unit's raw
    /// (not yet cut) output.  Parallel runs report after all units finish.
    fn on_unit_complete(&mut self, _unit: usize, _output: &UnitOutput) {}

    /// Called with the finished, post-processed scenario.
    ///
    /// Output writers hook in here so the synthesiser does not need to know
    /// about any specific format.
    fn on_generation_end(&mut self, _scenario: &Scenario) {}
}

/// A [`SynthObserver`] that does nothing.
pub struct NoopObserver;

impl SynthObserver for NoopObserver {}

/// A [`SynthObserver`] that reports progress through `tracing`.
#[derive(Default)]
pub struct LogObserver {
    waypoints: usize,
}

impl SynthObserver for LogObserver {
    fn on_generation_start(&mut self, model: &str, units: usize, horizon: f64) {
        self.waypoints = 0;
        info!(model, units, horizon, "generation started");
    }

    fn on_unit_complete(&mut self, unit: usize, output: &UnitOutput) {
        let waypoints = output.waypoint_count();
        self.waypoints += waypoints;
        debug!(unit, waypoints, "unit complete");
    }

    fn on_generation_end(&mut self, scenario: &Scenario) {
        info!(
            model = scenario.model_name(),
            entities = scenario.entity_count(),
            raw_waypoints = self.waypoints,
            "generation finished"
        );
    }
}
