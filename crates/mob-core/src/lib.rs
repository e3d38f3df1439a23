//! `mob-core` — foundational types for the `mobtrace` trace synthesis engine.
//!
//! This crate is a dependency of every other `mob-*` crate.  It has no
//! `mob-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EntityId`, `GroupId`                                 |
//! | [`geo`]         | `Position`, planar distance and proximity sampling    |
//! | [`geodesy`]     | `GeoPosition`, WGS-84 geodesics, ISO 6709 parsing     |
//! | [`timeline`]    | `Waypoint`, `Timeline`                                |
//! | [`rng`]         | `UnitRng` (per generation unit)                       |
//! | [`config`]      | `ScenarioConfig`                                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and geometry.     |

pub mod config;
pub mod error;
pub mod geo;
pub mod geodesy;
pub mod ids;
pub mod rng;
pub mod timeline;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScenarioConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Position;
pub use geodesy::GeoPosition;
pub use ids::{EntityId, GroupId};
pub use rng::UnitRng;
pub use timeline::{Timeline, Waypoint};
