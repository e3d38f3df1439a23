//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trace_samples.csv` — `time,entity,x,y`, time-major
//! - `waypoints.csv` — `entity,seq,time,x,y`, entity-major

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TraceSampleRow, WaypointRow};

pub const SAMPLES_FILE: &str = "trace_samples.csv";
pub const WAYPOINTS_FILE: &str = "waypoints.csv";

/// Writes trace output to two CSV files.
pub struct CsvWriter {
    samples:   Writer<File>,
    waypoints: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut samples = Writer::from_path(dir.join(SAMPLES_FILE))?;
        samples.write_record(["time", "entity", "x", "y"])?;

        let mut waypoints = Writer::from_path(dir.join(WAYPOINTS_FILE))?;
        waypoints.write_record(["entity", "seq", "time", "x", "y"])?;

        Ok(Self {
            samples,
            waypoints,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_samples(&mut self, rows: &[TraceSampleRow]) -> OutputResult<()> {
        for row in rows {
            self.samples.write_record(&[
                row.time.to_string(),
                row.entity.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        for row in rows {
            self.waypoints.write_record(&[
                row.entity.to_string(),
                row.seq.to_string(),
                row.time.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.waypoints.flush()?;
        Ok(())
    }
}
