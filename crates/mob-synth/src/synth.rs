//! The `Synth` struct and its generation run.

use mob_core::{Position, ScenarioConfig};
use mob_model::{MobilityModel, Scenario, UnitOutput, pre_generation};
use tracing::info;

use crate::{SynthObserver, SynthResult};

/// A validated generation job.
///
/// A run has four steps:
///
/// 1. **Pre-generation**: open the window `[0, ignore + duration]` and warn
///    on a short warm-up.
/// 2. **Units** (optionally parallel with the `parallel` feature): generate
///    every entity or group from its own RNG substream.
/// 3. **Assembly**: concatenate unit outputs in unit order into the flat
///    scenario arena.
/// 4. **Post-generation**: cut every timeline to the delivered window.
///
/// Create via [`SynthBuilder`][crate::SynthBuilder].
pub struct Synth {
    pub(crate) config: ScenarioConfig,
    pub(crate) model:  MobilityModel,
    /// Start positions taken from a predecessor scenario.
    pub(crate) starts: Option<Vec<Position>>,
}

impl Synth {
    #[inline]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    #[inline]
    pub fn model(&self) -> &MobilityModel {
        &self.model
    }

    /// `true` if this run continues a predecessor scenario.
    #[inline]
    pub fn is_chained(&self) -> bool {
        self.starts.is_some()
    }

    /// Generate the scenario, calling observer hooks along the way.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SynthObserver>(&self, observer: &mut O) -> SynthResult<Scenario> {
        let window = pre_generation(&self.config, self.is_chained())?;
        let unit_count = self.model.unit_count(&self.config);
        info!(
            model = self.model.name(),
            entities = self.config.entity_count,
            units = unit_count,
            horizon = window.horizon(),
            "synthesis started"
        );
        observer.on_generation_start(self.model.name(), unit_count, window.horizon());

        let units = self.generate_units(unit_count, window.horizon(), observer)?;
        let scenario = self.model.assemble(&self.config, &window, units)?;

        observer.on_generation_end(&scenario);
        info!(model = scenario.model_name(), entities = scenario.entity_count(), "synthesis finished");
        Ok(scenario)
    }

    fn start_of(&self, unit: usize) -> Option<Position> {
        self.starts.as_ref().and_then(|s| s.get(unit).copied())
    }

    /// Generate every unit, in unit order.
    fn generate_units<O: SynthObserver>(
        &self,
        unit_count: usize,
        horizon:    f64,
        observer:   &mut O,
    ) -> SynthResult<Vec<UnitOutput>> {
        #[cfg(not(feature = "parallel"))]
        {
            let mut units = Vec::with_capacity(unit_count);
            for unit in 0..unit_count {
                let output =
                    self.model.generate_unit(&self.config, unit, horizon, self.start_of(unit))?;
                observer.on_unit_complete(unit, &output);
                units.push(output);
            }
            Ok(units)
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            use crate::SynthError;

            let generate = || {
                (0..unit_count)
                    .into_par_iter()
                    .map(|unit| {
                        self.model.generate_unit(&self.config, unit, horizon, self.start_of(unit))
                    })
                    .collect::<Result<Vec<_>, _>>()
            };

            let units = match self.config.num_threads {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SynthError::ThreadPool { threads, reason: e.to_string() })?
                    .install(generate)?,
                None => generate()?,
            };

            for (unit, output) in units.iter().enumerate() {
                observer.on_unit_complete(unit, output);
            }
            Ok(units)
        }
    }
}
