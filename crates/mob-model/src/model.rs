//! The closed set of mobility models.

use mob_core::{Position, ScenarioConfig, Timeline};
use tracing::debug;

use crate::column::{self, ColumnParams, GroupTrace};
use crate::framework::{GenerationWindow, Sampler, post_generation, pre_generation};
use crate::random_direction::{self, RandomDirectionParams};
use crate::scenario::{GroupArena, Scenario};
use crate::{ModelError, ModelResult};

/// A mobility model together with its parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model"))]
pub enum MobilityModel {
    RandomDirection(RandomDirectionParams),
    Column(ColumnParams),
}

/// What one generation unit produced.
#[derive(Clone, Debug)]
pub enum UnitOutput {
    /// One independent entity.
    Entity(Timeline),
    /// One group: its reference points and the entities following them.
    Group(GroupTrace),
}

impl UnitOutput {
    /// Waypoints across every timeline the unit produced.
    pub fn waypoint_count(&self) -> usize {
        match self {
            UnitOutput::Entity(t) => t.len(),
            UnitOutput::Group(g) => {
                g.reference_points.iter().chain(&g.followers).map(Timeline::len).sum()
            }
        }
    }
}

impl MobilityModel {
    pub fn name(&self) -> &'static str {
        match self {
            MobilityModel::RandomDirection(_) => "RandomDirection",
            MobilityModel::Column(_) => "Column",
        }
    }

    /// Check `config` and the model parameters together.
    pub fn validate(&self, config: &ScenarioConfig) -> ModelResult<()> {
        config.validate()?;
        // A zero speed draw would make a segment last forever.
        if config.min_speed <= 0.0 {
            return Err(ModelError::InvalidConfig(format!(
                "{} needs a positive minimum speed, got {}",
                self.name(),
                config.min_speed
            )));
        }
        match self {
            MobilityModel::RandomDirection(p) => p.validate(config),
            MobilityModel::Column(p) => p.validate(config),
        }
    }

    /// Number of independent generation units: entities for Random
    /// Direction, groups for Column.
    pub fn unit_count(&self, config: &ScenarioConfig) -> usize {
        match self {
            MobilityModel::RandomDirection(_) => config.entity_count,
            MobilityModel::Column(p) => p.group_count,
        }
    }

    /// Start positions for a scenario that continues `predecessor`.
    pub fn chain_starts(
        &self,
        config:      &ScenarioConfig,
        predecessor: &Scenario,
    ) -> ModelResult<Vec<Position>> {
        let starts = predecessor.final_positions();
        self.check_starts(config, &starts)?;
        Ok(starts)
    }

    /// Only Random Direction can start from given positions, one per entity.
    pub fn check_starts(&self, config: &ScenarioConfig, starts: &[Position]) -> ModelResult<()> {
        if !matches!(self, MobilityModel::RandomDirection(_)) {
            return Err(ModelError::InvalidConfig(format!(
                "{} scenarios cannot continue a predecessor",
                self.name()
            )));
        }
        if starts.len() != config.entity_count {
            return Err(ModelError::PredecessorMismatch {
                expected: config.entity_count,
                got:      starts.len(),
            });
        }
        if let Some(p) = starts.iter().find(|p| !p.within(config.width, config.height, 0.0)) {
            return Err(ModelError::InvalidConfig(format!(
                "start position {p} lies outside the {} x {} area",
                config.width, config.height
            )));
        }
        Ok(())
    }

    /// Generate unit `unit` over `[0, horizon]`.
    ///
    /// The result depends only on the seed, `unit`, and the parameters.
    pub fn generate_unit(
        &self,
        config:  &ScenarioConfig,
        unit:    usize,
        horizon: f64,
        start:   Option<Position>,
    ) -> ModelResult<UnitOutput> {
        let mut sampler = Sampler::for_unit(config, unit);
        let out = match self {
            MobilityModel::RandomDirection(p) => UnitOutput::Entity(
                random_direction::generate_entity(p, &mut sampler, horizon, start)?,
            ),
            MobilityModel::Column(p) => {
                UnitOutput::Group(column::generate_group(p, &mut sampler, horizon)?)
            }
        };
        debug!(model = self.name(), unit, waypoints = out.waypoint_count(), "unit generated");
        Ok(out)
    }

    /// Combine unit outputs (in unit order) into a scenario and apply
    /// post-generation.
    pub fn assemble(
        &self,
        config: &ScenarioConfig,
        window: &GenerationWindow,
        units:  Vec<UnitOutput>,
    ) -> ModelResult<Scenario> {
        let mut entities = Vec::with_capacity(config.entity_count);
        let mut groups = match self {
            MobilityModel::Column(p) => {
                Some((p.per_group(config), Vec::with_capacity(config.entity_count)))
            }
            MobilityModel::RandomDirection(_) => None,
        };

        for unit in units {
            match (unit, groups.as_mut()) {
                (UnitOutput::Entity(t), None) => entities.push(t),
                (UnitOutput::Group(g), Some((_, refs))) => {
                    refs.extend(g.reference_points);
                    entities.extend(g.followers);
                }
                _ => {
                    return Err(ModelError::InvalidConfig(format!(
                        "unit output does not belong to a {} scenario",
                        self.name()
                    )));
                }
            }
        }

        let groups = groups.map(|(per_group, refs)| GroupArena::new(per_group, refs));
        let mut scenario = Scenario::new(config.clone(), self.name(), entities, groups);
        post_generation(scenario.timelines_mut(), window)?;
        Ok(scenario)
    }

    /// Run the whole lifecycle sequentially, without observers.
    ///
    /// `mob_synth::Synth` adds observer hooks and parallel generation on top
    /// of the same steps.
    pub fn generate(&self, config: &ScenarioConfig, starts: Option<&[Position]>) -> ModelResult<Scenario> {
        self.validate(config)?;
        if let Some(starts) = starts {
            self.check_starts(config, starts)?;
        }
        let window = pre_generation(config, starts.is_some())?;
        let units = (0..self.unit_count(config))
            .map(|u| {
                let start = starts.and_then(|s| s.get(u).copied());
                self.generate_unit(config, u, window.horizon(), start)
            })
            .collect::<ModelResult<Vec<_>>>()?;
        self.assemble(config, &window, units)
    }
}
