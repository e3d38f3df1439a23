//! The generated scenario: a flat arena of entity timelines.

use mob_core::{EntityId, GroupId, Position, ScenarioConfig, Timeline};

use crate::{ModelError, ModelResult};

// ── GroupArena ────────────────────────────────────────────────────────────────

/// Reference-point timelines of a grouped model, stored flat.
///
/// Member `j` of group `g` lives at index `g · per_group + j`, the same
/// index as the entity that follows it.
#[derive(Clone, Debug, Default)]
pub struct GroupArena {
    per_group:        usize,
    reference_points: Vec<Timeline>,
}

impl GroupArena {
    pub fn new(per_group: usize, reference_points: Vec<Timeline>) -> Self {
        Self { per_group, reference_points }
    }

    #[inline]
    pub fn per_group(&self) -> usize {
        self.per_group
    }

    pub fn group_count(&self) -> usize {
        if self.per_group == 0 { 0 } else { self.reference_points.len() / self.per_group }
    }

    /// All reference points of `group`, leader first.
    pub fn group(&self, group: GroupId) -> Option<&[Timeline]> {
        let start = group.index().checked_mul(self.per_group)?;
        self.reference_points.get(start..start + self.per_group)
    }

    /// Reference point `member` of `group`.
    pub fn reference_point(&self, group: GroupId, member: usize) -> Option<&Timeline> {
        if member >= self.per_group {
            return None;
        }
        self.group(group).map(|g| &g[member])
    }

    /// The group an entity belongs to.
    pub fn group_of(&self, entity: EntityId) -> Option<GroupId> {
        if entity.index() >= self.reference_points.len() {
            return None;
        }
        GroupId::try_from(entity.index() / self.per_group).ok()
    }

    /// Every reference-point timeline in arena order.
    #[inline]
    pub fn reference_points(&self) -> &[Timeline] {
        &self.reference_points
    }

    pub(crate) fn reference_points_mut(&mut self) -> &mut [Timeline] {
        &mut self.reference_points
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// One sampled position of one entity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceSample {
    pub time:   f64,
    pub entity: EntityId,
    pub pos:    Position,
}

/// A finished, post-processed scenario.
///
/// Every timeline starts at time 0 and ends at or before `duration`.
#[derive(Clone, Debug)]
pub struct Scenario {
    config:   ScenarioConfig,
    model:    &'static str,
    entities: Vec<Timeline>,
    groups:   Option<GroupArena>,
}

impl Scenario {
    pub fn new(
        config:   ScenarioConfig,
        model:    &'static str,
        entities: Vec<Timeline>,
        groups:   Option<GroupArena>,
    ) -> Self {
        Self { config, model, entities, groups }
    }

    #[inline]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Name of the model that generated this scenario.
    #[inline]
    pub fn model_name(&self) -> &'static str {
        self.model
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn entities(&self) -> &[Timeline] {
        &self.entities
    }

    #[inline]
    pub fn entity(&self, id: EntityId) -> Option<&Timeline> {
        self.entities.get(id.index())
    }

    /// Iterate `(EntityId, &Timeline)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Timeline)> + '_ {
        self.entities.iter().enumerate().map(|(i, t)| (EntityId(i as u32), t))
    }

    /// Reference points, for grouped models.
    #[inline]
    pub fn groups(&self) -> Option<&GroupArena> {
        self.groups.as_ref()
    }

    pub(crate) fn timelines_mut(&mut self) -> impl Iterator<Item = &mut Timeline> + '_ {
        let refs = self.groups.as_mut().map(|g| g.reference_points_mut()).unwrap_or_default();
        self.entities.iter_mut().chain(refs.iter_mut())
    }

    /// Position of `id` at time `t`.
    pub fn position_at(&self, id: EntityId, t: f64) -> ModelResult<Position> {
        let timeline = self.entity(id).ok_or(ModelError::UnknownEntity(id))?;
        Ok(timeline.position_at(t)?)
    }

    /// Position of every entity at its last waypoint, in id order.
    ///
    /// This is where a chained scenario starts.
    pub fn final_positions(&self) -> Vec<Position> {
        self.entities
            .iter()
            .map(|t| t.last_waypoint().map(|w| w.pos).unwrap_or_default())
            .collect()
    }

    /// Every entity's position at `t = k · interval` for all `t < duration`,
    /// time-major.
    pub fn samples(&self, interval: f64) -> ModelResult<Samples<'_>> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(ModelError::InvalidConfig(format!(
                "sampling interval must be positive, got {interval}"
            )));
        }
        Ok(Samples { scenario: self, interval, step: 0, entity: 0 })
    }
}

/// Iterator returned by [`Scenario::samples`].
pub struct Samples<'s> {
    scenario: &'s Scenario,
    interval: f64,
    step:     u64,
    entity:   usize,
}

impl Iterator for Samples<'_> {
    type Item = ModelResult<TraceSample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.scenario.entities.is_empty() {
            return None;
        }
        if self.entity == self.scenario.entities.len() {
            self.entity = 0;
            self.step += 1;
        }
        // Multiply rather than accumulate so long traces do not drift.
        let time = self.step as f64 * self.interval;
        if time >= self.scenario.config.duration {
            return None;
        }

        let i = self.entity;
        self.entity += 1;
        let sample = self.scenario.entities[i]
            .position_at(time)
            .map(|pos| TraceSample { time, entity: EntityId(i as u32), pos })
            .map_err(ModelError::from);
        Some(sample)
    }
}
