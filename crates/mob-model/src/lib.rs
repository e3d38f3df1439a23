//! `mob-model` — mobility models and the scenario they produce.
//!
//! # Crate layout
//!
//! | Module                | Contents                                                 |
//! |-----------------------|----------------------------------------------------------|
//! | [`framework`]         | `Sampler`, `GenerationWindow`, pre/post generation hooks |
//! | [`random_direction`]  | `RandomDirectionParams`, wall-to-wall entity walk        |
//! | [`column`]            | `ColumnParams`, `GroupTrace`, reference-point columns    |
//! | [`follower`]          | `FollowerWalk`, `FollowerStep`: entities trailing a path |
//! | [`model`]             | `MobilityModel` enum, `UnitOutput`                       |
//! | [`scenario`]          | `Scenario`, `GroupArena`, `TraceSample`                  |
//! | [`error`]             | `ModelError`, `ModelResult<T>`                           |
//!
//! # Design notes
//!
//! Generation is split into independent *units*: one entity for Random
//! Direction, one group for Column.  Each unit owns a `Sampler` seeded from
//! the scenario seed and its unit index, so units can run in any order or in
//! parallel (see `mob-synth`) and still produce identical waypoints.
//!
//! Units are combined into a [`Scenario`] by [`MobilityModel::assemble`],
//! which also applies post-generation: every timeline is cut to the
//! delivered window and rebased to start at 0.

pub mod column;
pub mod error;
pub mod follower;
pub mod framework;
pub mod model;
pub mod random_direction;
pub mod scenario;


pub use column::{ColumnParams, GroupTrace};
pub use error::{ModelError, ModelResult};
pub use follower::{FollowerStep, FollowerWalk};
pub use framework::{GenerationWindow, Sampler, post_generation, pre_generation};
pub use model::{MobilityModel, UnitOutput};
pub use random_direction::RandomDirectionParams;
pub use scenario::{GroupArena, Samples, Scenario, TraceSample};
