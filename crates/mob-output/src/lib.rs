//! `mob-output` — trace output writers for the mobtrace engine.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `trace_samples.csv`, `waypoints.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TraceOutputObserver`], which implements `mob_synth::SynthObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mob_output::{CsvWriter, TraceOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceOutputObserver::new(writer, 1.0)?;
//! synth.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceOutputObserver;
pub use row::{TraceSampleRow, WaypointRow};
pub use writer::OutputWriter;
