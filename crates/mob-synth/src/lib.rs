//! `mob-synth` — generation orchestrator for the mobtrace engine.
//!
//! # Run
//!
//! ```text
//! SynthBuilder::build     validate config + model parameters (+ predecessor)
//! Synth::run:
//!   ① pre-generation      window = [0, ignore + duration]
//!   ② units               one per entity (Random Direction) or group (Column),
//!                         each on its own RNG substream, in parallel with
//!                         the `parallel` feature
//!   ③ assembly            unit outputs concatenated in unit order
//!   ④ post-generation     cut to [ignore, ignore + duration], rebased to 0
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Generates units on Rayon's thread pool (or a dedicated  |
//! |            | pool of `ScenarioConfig::num_threads` workers).         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mob_core::ScenarioConfig;
//! use mob_model::{MobilityModel, RandomDirectionParams};
//! use mob_synth::{NoopObserver, SynthBuilder};
//!
//! let model = MobilityModel::RandomDirection(RandomDirectionParams::default());
//! let scenario = SynthBuilder::new(config, model).build()?.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod synth;


pub use builder::SynthBuilder;
pub use error::{SynthError, SynthResult};
pub use observer::{LogObserver, NoopObserver, SynthObserver};
pub use synth::Synth;
