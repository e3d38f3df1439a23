//! Plain data row types written by output backends.

use mob_model::TraceSample;

/// One entity's position at one sampling instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSampleRow {
    pub time:   f64,
    pub entity: u32,
    pub x:      f64,
    pub y:      f64,
}

impl From<TraceSample> for TraceSampleRow {
    fn from(s: TraceSample) -> Self {
        Self { time: s.time, entity: s.entity.0, x: s.pos.x, y: s.pos.y }
    }
}

/// One stored waypoint of one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointRow {
    pub entity: u32,
    /// Position of the waypoint within the entity's timeline, from 0.
    pub seq:    u32,
    pub time:   f64,
    pub x:      f64,
    pub y:      f64,
}
