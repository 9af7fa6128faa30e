//! office: runs one contagion scenario on a built-in floor plan.
//!
//! ```text
//! office [PARAMS_JSON] [OUTPUT_DIR]
//! ```
//!
//! `PARAMS_JSON` holds any subset of the `SimParams` fields; missing fields
//! take their defaults.  Output lands in `OUTPUT_DIR` (default
//! `output/office`): the three CSV files plus `frames.json`, one display-code
//! matrix per tick.  Set `RUST_LOG=debug` for per-tick progress.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use oc_agent::HealthClass;
use oc_core::SimParams;
use oc_grid::FloorPlans;
use oc_output::{CsvWriter, SimOutputObserver};
use oc_sim::{Frame, FrameRecorder, Lineage, SimBuilder, Tee};

#[cfg(test)]
mod tests;

/// Command-line arguments for the office demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON parameter file (defaults for every missing field)
    params: Option<PathBuf>,

    /// Directory for the CSV files and frames.json
    #[arg(default_value = "output/office")]
    output_dir: PathBuf,
}

fn load_params(path: Option<&Path>) -> Result<SimParams> {
    let Some(path) = path else {
        return Ok(SimParams::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

/// Write one display-code matrix per frame as a JSON array.
fn write_frames(path: &Path, frames: &[Frame]) -> Result<()> {
    let codes: Vec<Vec<Vec<u8>>> = frames.iter().map(Frame::to_codes).collect();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer(&mut w, &codes)?;
    w.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let params = load_params(args.params.as_deref())?;
    let plans = FloorPlans::builtin()?;
    let layout = plans.get(params.office_plan)?.clone();

    println!("=== office contagion ===");
    println!(
        "Plan {} ({}×{}, {} desks)  |  Agents: {}  |  Carriers: {}  |  Ticks: {}  |  Seed: {}",
        params.office_plan.0,
        layout.width(),
        layout.height(),
        layout.desk_count(),
        params.population_size,
        params.initial_infected,
        params.duration_ticks,
        params.seed,
    );
    println!(
        "Masks: {}%  |  Distancing: {}%  |  Virality: {}",
        params.mask_adherence, params.distancing_adherence, params.virality,
    );
    println!();

    let mut sim = SimBuilder::new(params, layout).build()?;

    let writer = CsvWriter::new(&args.output_dir)?;
    let mut obs = Tee(FrameRecorder::new(), SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    let Tee(recorder, mut output) = obs;
    if let Some(e) = output.take_error() {
        return Err(e).context("writing CSV output");
    }
    write_frames(&args.output_dir.join("frames.json"), &recorder.frames)?;

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if let Some(last) = recorder.summaries.last() {
        println!(
            "  infected: {} of {} ({:.1}%), {} secondary",
            last.infected,
            last.population,
            last.infected_fraction() * 100.0,
            last.secondary(),
        );
    }
    println!("  output  : {}", args.output_dir.display());
    println!();

    // Lineage table.
    let roster = sim.agents.roster();
    let lineage = Lineage::from_roster(&roster);
    println!("{:<10} {:<6} {:<7} {}", "Carrier", "Age", "Masked", "Infected");
    println!("{}", "-".repeat(40));
    for carrier in lineage.carriers() {
        let record = &roster[carrier.slot()];
        let cases: Vec<String> = lineage.infected_by(carrier).iter().map(|a| a.0.to_string()).collect();
        println!(
            "{:<10} {:<6} {:<7} {}",
            carrier.0,
            record.age,
            if record.masked { "yes" } else { "no" },
            if cases.is_empty() { "-".to_owned() } else { cases.join(", ") },
        );
    }

    let untouched = roster
        .iter()
        .filter(|r| r.health_class() == HealthClass::Susceptible)
        .count();
    log::info!("{untouched} agents never infected");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Args::parse())
}
