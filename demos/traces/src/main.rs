//! traces — generates the two reference scenarios of the mobtrace engine.
//!
//! 1. **square**: one Random Direction entity bouncing around a 100 × 100 m
//!    square at 1 m/s, then a second leg chained onto its final position.
//! 2. **columns**: six entities in two Column groups.
//!
//! Each scenario writes `trace_samples.csv` and `waypoints.csv` under the
//! output directory.  Pass a JSON file to override the defaults:
//!
//! ```json
//! {
//!   "output_dir": "./output",
//!   "sample_interval": 1.0,
//!   "origin": "+50.7374+007.0982/",
//!   "config": { "entity_count": 6, "duration": 500.0, "seed": 7 },
//!   "column": { "group_count": 2, "ref_point_separation": 10.0, "max_dist": 2.5 }
//! }
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mob_core::{GeoPosition, ScenarioConfig};
use mob_model::{ColumnParams, MobilityModel, RandomDirectionParams, Scenario};
use mob_output::{CsvWriter, TraceOutputObserver};
use mob_synth::{LogObserver, SynthBuilder, SynthObserver};

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoSettings {
    output_dir:       PathBuf,
    sample_interval:  f64,
    /// ISO 6709 anchor of the area's south-west corner.
    origin:           Option<String>,
    /// Settings for the column scenario.
    config:           ScenarioConfig,
    column:           ColumnParams,
    random_direction: RandomDirectionParams,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            output_dir:       PathBuf::from("output"),
            sample_interval:  1.0,
            origin:           None,
            config:           ScenarioConfig {
                entity_count: 6,
                duration:     500.0,
                seed:         7,
                ..ScenarioConfig::default()
            },
            column:           ColumnParams { group_count: 2, ..ColumnParams::default() },
            random_direction: RandomDirectionParams::default(),
        }
    }
}

fn load_settings() -> Result<DemoSettings> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(DemoSettings::default()),
    }
}

// ── Observer that logs and writes ─────────────────────────────────────────────

/// Forwards every hook to both a `LogObserver` and a trace writer.
struct DemoObserver {
    log:    LogObserver,
    output: TraceOutputObserver<CsvWriter>,
}

impl SynthObserver for DemoObserver {
    fn on_generation_start(&mut self, model: &str, units: usize, horizon: f64) {
        self.log.on_generation_start(model, units, horizon);
        self.output.on_generation_start(model, units, horizon);
    }

    fn on_unit_complete(&mut self, unit: usize, output: &mob_model::UnitOutput) {
        self.log.on_unit_complete(unit, output);
        self.output.on_unit_complete(unit, output);
    }

    fn on_generation_end(&mut self, scenario: &Scenario) {
        self.log.on_generation_end(scenario);
        self.output.on_generation_end(scenario);
    }
}

fn run_scenario(
    name:        &str,
    settings:    &DemoSettings,
    config:      ScenarioConfig,
    model:       MobilityModel,
    predecessor: Option<&Scenario>,
) -> Result<Scenario> {
    let dir = settings.output_dir.join(name);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut builder = SynthBuilder::new(config, model);
    if let Some(p) = predecessor {
        builder = builder.predecessor(p);
    }
    let synth = builder.build().with_context(|| format!("configuring scenario {name}"))?;

    let writer = CsvWriter::new(&dir)?;
    let mut obs = DemoObserver {
        log:    LogObserver::default(),
        output: TraceOutputObserver::new(writer, settings.sample_interval)?,
    };

    let started = Instant::now();
    let scenario = synth.run(&mut obs).with_context(|| format!("generating scenario {name}"))?;
    if let Some(e) = obs.output.take_error() {
        return Err(e).with_context(|| format!("writing {}", dir.display()));
    }

    info!(
        scenario = name,
        entities = scenario.entity_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        dir = %dir.display(),
        "scenario written"
    );
    Ok(scenario)
}

fn report(name: &str, scenario: &Scenario) {
    println!("{name}: {} entities ({})", scenario.entity_count(), scenario.model_name());
    println!("{:<10} {:>10} {:>10} {:>10}", "Entity", "Waypoints", "Final x", "Final y");
    println!("{}", "-".repeat(43));
    for ((id, t), pos) in scenario.iter().zip(scenario.final_positions()) {
        println!("{:<10} {:>10} {:>10.2} {:>10.2}", id.to_string(), t.len(), pos.x, pos.y);
    }
    println!();
}

/// Geographic extent of the area when anchored at `origin`.
fn report_geography(origin: &str, width: f64, height: f64) -> Result<()> {
    let sw: GeoPosition = origin.parse().with_context(|| format!("parsing origin {origin:?}"))?;
    let se = sw.shift(90.0, width);
    let ne = se.shift(0.0, height);
    println!("Area anchored at {sw}: north-east corner {ne}");
    println!("Diagonal: {:.1} m (planar {:.1} m)", sw.distance_m(ne), width.hypot(height));
    println!();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings()?;
    println!("=== traces: mobtrace reference scenarios ===");
    println!("Output: {}", settings.output_dir.display());
    println!();

    // ── Square: Random Direction, then a chained second leg ───────────────
    let square = ScenarioConfig {
        entity_count: 1,
        width:        100.0,
        height:       100.0,
        duration:     1000.0,
        ignore:       0.0,
        seed:         42,
        min_speed:    1.0,
        max_speed:    1.0,
        max_pause:    0.0,
        ..ScenarioConfig::default()
    };
    let rd = MobilityModel::RandomDirection(settings.random_direction.clone());
    let first = run_scenario("square", &settings, square.clone(), rd.clone(), None)?;
    report("square", &first);

    let leg2 = ScenarioConfig { seed: square.seed + 1, ..square };
    let second = run_scenario("square_leg2", &settings, leg2, rd, Some(&first))?;
    report("square_leg2", &second);

    // ── Columns ───────────────────────────────────────────────────────────
    let column = MobilityModel::Column(settings.column.clone());
    let columns = run_scenario("columns", &settings, settings.config.clone(), column, None)?;
    report("columns", &columns);
    if let Some(groups) = columns.groups() {
        println!("{} groups of {} reference points", groups.group_count(), groups.per_group());
        println!();
    }

    if let Some(origin) = &settings.origin {
        report_geography(origin, settings.config.width, settings.config.height)?;
    }

    Ok(())
}
