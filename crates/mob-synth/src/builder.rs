//! Fluent builder for constructing a [`Synth`].

use mob_core::ScenarioConfig;
use mob_model::{MobilityModel, Scenario};

use crate::{Synth, SynthResult};

/// Fluent builder for [`Synth`].
///
/// # Required inputs
///
/// - [`ScenarioConfig`]: area, duration, warm-up, speeds, seed
/// - [`MobilityModel`]: the model and its parameters
///
/// # Optional inputs
///
/// | Method              | Default                          |
/// |---------------------|----------------------------------|
/// | `.predecessor(s)`   | Random start positions           |
///
/// # Example
///
/// ```rust,ignore
/// let synth = SynthBuilder::new(config, MobilityModel::Column(params)).build()?;
/// let scenario = synth.run(&mut NoopObserver)?;
/// ```
pub struct SynthBuilder<'p> {
    config:      ScenarioConfig,
    model:       MobilityModel,
    predecessor: Option<&'p Scenario>,
}

impl<'p> SynthBuilder<'p> {
    pub fn new(config: ScenarioConfig, model: MobilityModel) -> Self {
        Self { config, model, predecessor: None }
    }

    /// Continue from the final positions of `predecessor`.
    ///
    /// Only Random Direction supports this, and the entity counts must
    /// match; `build` reports either problem.
    pub fn predecessor(mut self, predecessor: &'p Scenario) -> Self {
        self.predecessor = Some(predecessor);
        self
    }

    /// Validate every input and return a ready-to-run [`Synth`].
    ///
    /// Configuration errors surface here, before any generation work.
    pub fn build(self) -> SynthResult<Synth> {
        self.model.validate(&self.config)?;

        let starts = match self.predecessor {
            Some(p) => Some(self.model.chain_starts(&self.config, p)?),
            None => None,
        };

        Ok(Synth {
            config: self.config,
            model:  self.model,
            starts,
        })
    }
}
