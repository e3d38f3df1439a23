//! Column: groups that move as a line of reference points.
//!
//! Each group has a leader and `per_group - 1` further reference points
//! strung out behind it at a fixed separation along the leader's current
//! heading.  Entities do not walk the reference points themselves; each
//! one follows its own reference point via [`FollowerWalk`].
//!
//! A group is one generation unit: its leader, reference points, and
//! followers all draw from the same [`Sampler`] in that order, and share
//! one group clock.

use mob_core::{Position, ScenarioConfig, Timeline};
use tracing::debug;

use crate::follower::FollowerWalk;
use crate::framework::{Sampler, travel_time};
use crate::{ModelError, ModelResult};

/// Parameters specific to the Column model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnParams {
    /// Number of groups; must divide `entity_count`.
    pub group_count:          usize,
    /// Distance between neighbouring reference points, in metres.
    pub ref_point_separation: f64,
    /// Followers stay within this radius of their reference point's aim.
    pub max_dist:             f64,
}

impl Default for ColumnParams {
    fn default() -> Self {
        Self {
            group_count:          1,
            ref_point_separation: 10.0,
            max_dist:             2.5,
        }
    }
}

impl ColumnParams {
    /// Entities (and reference points) per group.
    #[inline]
    pub fn per_group(&self, config: &ScenarioConfig) -> usize {
        if self.group_count == 0 { 0 } else { config.entity_count / self.group_count }
    }

    pub fn validate(&self, config: &ScenarioConfig) -> ModelResult<()> {
        if self.group_count == 0 {
            return Err(ModelError::InvalidConfig("group count must be at least 1".into()));
        }
        if config.entity_count % self.group_count != 0 {
            return Err(ModelError::GroupCountMismatch {
                entities: config.entity_count,
                groups:   self.group_count,
            });
        }
        if !(self.ref_point_separation.is_finite() && self.ref_point_separation >= 0.0) {
            return Err(ModelError::InvalidConfig(format!(
                "reference point separation must be non-negative, got {}",
                self.ref_point_separation
            )));
        }
        if !(self.max_dist.is_finite() && self.max_dist >= 0.0) {
            return Err(ModelError::InvalidConfig(format!(
                "max distance must be non-negative, got {}",
                self.max_dist
            )));
        }
        if 2.0 * self.max_dist > config.width || 2.0 * self.max_dist > config.height {
            return Err(ModelError::InvalidConfig(format!(
                "area {} x {} is narrower than twice the max distance {}",
                config.width, config.height, self.max_dist
            )));
        }

        let per_group = self.per_group(config);
        let extent = per_group.saturating_sub(1) as f64 * self.ref_point_separation;
        if extent > config.width || extent > config.height {
            return Err(ModelError::GroupExtentExceedsArea {
                per_group,
                separation: self.ref_point_separation,
                extent,
                width:      config.width,
                height:     config.height,
            });
        }
        Ok(())
    }
}

/// Everything generated for one group.
#[derive(Clone, Debug, Default)]
pub struct GroupTrace {
    /// Leader first, then reference points in column order.
    pub reference_points: Vec<Timeline>,
    /// `followers[j]` follows `reference_points[j]`.
    pub followers:        Vec<Timeline>,
}

/// Generate one group over `[0, horizon]`.
pub fn generate_group(
    params:  &ColumnParams,
    sampler: &mut Sampler<'_>,
    horizon: f64,
) -> ModelResult<GroupTrace> {
    let reference_points = walk_reference_points(params, sampler, horizon)?;

    let mut followers = Vec::with_capacity(reference_points.len());
    for reference in &reference_points {
        let walk = FollowerWalk::start(reference, params.max_dist, horizon, sampler)?;
        followers.push(walk.run(sampler)?);
    }

    debug!(
        reference_points = reference_points.len(),
        waypoints = followers.iter().map(Timeline::len).sum::<usize>(),
        "column group generated"
    );
    Ok(GroupTrace { reference_points, followers })
}

/// `leader + j·sep`, pushed back onto the area edge if it falls outside.
fn column_slot(leader: Position, sep: (f64, f64), j: usize, width: f64, height: f64) -> Position {
    let j = j as f64;
    leader.translate(j * sep.0, j * sep.1).clamp_to(width, height)
}

fn walk_reference_points(
    params:  &ColumnParams,
    sampler: &mut Sampler<'_>,
    horizon: f64,
) -> ModelResult<Vec<Timeline>> {
    let (width, height, max_pause) = {
        let c = sampler.config();
        (c.width, c.height, c.max_pause)
    };
    let per_group = params.per_group(sampler.config());
    let margin = params.max_dist;
    let separation = params.ref_point_separation;

    // ── Placement ────────────────────────────────────────────────────────────
    // The initial column lies along x only, with length scaled by sin(dir).
    let dir = sampler.random_heading();
    let sep = (separation * dir.sin(), 0.0);
    let leader = sampler.random_inset_position(margin);
    let mut points = Vec::with_capacity(per_group);
    for j in 0..per_group {
        let pos = if j == 0 { leader } else { column_slot(leader, sep, j, width, height) };
        points.push(Timeline::starting_at(0.0, pos)?);
    }

    // ── Walk ─────────────────────────────────────────────────────────────────
    let mut t = 0.0;
    let mut sep = (0.0, 0.0);
    while t < horizon {
        for j in 0..per_group {
            let src = points[j].position_at(t)?;
            points[j].append(t, src)?;

            let dst = if j == 0 {
                let dir = sampler.random_heading();
                let (sin, cos) = dir.sin_cos();
                sep = (separation * cos, separation * sin);
                sampler.random_inset_position(margin)
            } else {
                let leader = points[0].position_at(t)?;
                column_slot(leader, sep, j, width, height)
            };

            let speed = sampler.random_speed();
            t += travel_time(src.distance(dst), speed);
            points[j].append(t, dst)?;

            if t < horizon && max_pause > 0.0 {
                let pause = max_pause * sampler.random_uniform();
                if pause > 0.0 {
                    t += pause;
                    points[j].append(t, dst)?;
                }
            }
        }
        if per_group == 0 {
            break;
        }
    }

    Ok(points)
}
