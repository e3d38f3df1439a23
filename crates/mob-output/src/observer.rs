//! `TraceOutputObserver<W>` — bridges `SynthObserver` to an `OutputWriter`.

use mob_model::Scenario;
use mob_synth::SynthObserver;
use tracing::info;

use crate::row::{TraceSampleRow, WaypointRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SynthObserver`] that samples the finished scenario at a fixed
/// interval and writes the samples (and, optionally, every raw waypoint) to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SynthObserver`
/// methods have no return value.  After `synth.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TraceOutputObserver<W: OutputWriter> {
    writer:     W,
    interval:   f64,
    waypoints:  bool,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceOutputObserver<W> {
    /// Create an observer that samples every `interval` seconds.
    pub fn new(writer: W, interval: f64) -> OutputResult<Self> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(OutputError::InvalidInterval(interval));
        }
        Ok(Self {
            writer,
            interval,
            waypoints:  true,
            last_error: None,
        })
    }

    /// Whether raw waypoints are written as well (default `true`).
    pub fn with_waypoints(mut self, waypoints: bool) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Take the stored write error (if any) after `synth.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    /// One batch per sampling instant.
    fn write_samples(&mut self, scenario: &Scenario) -> OutputResult<usize> {
        let batch = scenario.entity_count().max(1);
        let mut rows = Vec::with_capacity(batch);
        let mut written = 0;
        for sample in scenario.samples(self.interval)? {
            rows.push(TraceSampleRow::from(sample?));
            if rows.len() == batch {
                self.writer.write_samples(&rows)?;
                written += rows.len();
                rows.clear();
            }
        }
        if !rows.is_empty() {
            self.writer.write_samples(&rows)?;
            written += rows.len();
        }
        Ok(written)
    }

    /// One batch per entity.
    fn write_waypoints(&mut self, scenario: &Scenario) -> OutputResult<usize> {
        let mut written = 0;
        for (id, timeline) in scenario.iter() {
            let rows: Vec<WaypointRow> = timeline
                .waypoints()
                .iter()
                .enumerate()
                .map(|(seq, w)| WaypointRow {
                    entity: id.0,
                    seq:    seq as u32,
                    time:   w.time,
                    x:      w.pos.x,
                    y:      w.pos.y,
                })
                .collect();
            if !rows.is_empty() {
                self.writer.write_waypoints(&rows)?;
                written += rows.len();
            }
        }
        Ok(written)
    }
}

impl<W: OutputWriter> SynthObserver for TraceOutputObserver<W> {
    fn on_generation_end(&mut self, scenario: &Scenario) {
        let samples = self.write_samples(scenario);
        let samples = samples.map(|n| info!(rows = n, interval = self.interval, "trace samples written"));
        self.store_err(samples);

        if self.waypoints {
            let waypoints = self.write_waypoints(scenario);
            let waypoints = waypoints.map(|n| info!(rows = n, "waypoints written"));
            self.store_err(waypoints);
        }

        let result = self.writer.finish();
        self.store_err(result);
    }
}
