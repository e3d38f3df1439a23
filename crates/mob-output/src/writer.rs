//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TraceSampleRow, WaypointRow};

/// Trait implemented by trace writers.
///
/// Errors surface to the observer, which keeps the first one for
/// [`TraceOutputObserver::take_error`][crate::TraceOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of sampled positions.
    fn write_samples(&mut self, rows: &[TraceSampleRow]) -> OutputResult<()>;

    /// Write a batch of raw waypoints.
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
