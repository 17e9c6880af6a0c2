use anyhow::Result;
use clap::Parser;
use rockpaper_lib::app::{SimEvent, Simulation};
use rockpaper_lib::model::config::{AppConfig, GridConfig, SimulationConfig};
use rockpaper_lib::model::metrics::init_logging;
use rockpaper_lib::model::Species;
use std::io::{BufWriter, Write};

/// The CLI always starts running: `simulation.start_running` from the config
/// file is overridden, since a paused headless run would never sample.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output mode
    #[arg(short, long, value_enum, default_value = "headless")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Grid side length (overrides the config file)
    #[arg(long)]
    size: Option<usize>,

    /// Interactions per tick (overrides the config file)
    #[arg(long)]
    steps_per_tick: Option<usize>,

    /// Number of ticks to run; each tick ends with one history sample
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    /// Stream every event as a JSON line on stdout
    Headless,
    /// Print only the final composition
    Summary,
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if args.size.is_some() {
        config.grid.size = GridConfig::clamped(args.size).size;
    }
    if args.steps_per_tick.is_some() {
        config.simulation.steps_per_tick = SimulationConfig::clamped_steps(args.steps_per_tick);
    }
    if !config.simulation.start_running {
        tracing::warn!("Ignoring start_running = false: the CLI always runs");
        config.simulation.start_running = true;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    init_logging(&config.logging.level);
    apply_overrides(&mut config, &args);
    tracing::info!(
        size = config.grid.size,
        steps_per_tick = config.simulation.steps_per_tick,
        fingerprint = %config.fingerprint(),
        "Starting simulation"
    );

    let mut sim = Simulation::new(config)?;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.mode {
        Mode::Headless => {
            sim.run_for(args.ticks, |event| {
                writeln!(out, "{}", event.to_json_line()?)?;
                Ok(())
            })?;
        }
        Mode::Summary => {
            let done = sim.run_for(args.ticks, |event| {
                if let SimEvent::Monoculture { species, .. } = event {
                    tracing::info!(species = %species, "Simulation reached a fixed point");
                }
                Ok(())
            })?;
            writeln!(out, "ticks: {}", done)?;
            writeln!(out, "steps: {}", sim.metrics.steps())?;
            writeln!(out, "conversions: {}", sim.metrics.conversions())?;
            if let Some(latest) = sim.history.latest() {
                let pct = latest.percentages();
                for species in Species::ALL {
                    writeln!(
                        out,
                        "{:<9} {:>8} {:>6.2}%",
                        species.name(),
                        latest.counts.get(species),
                        pct[species.index()]
                    )?;
                }
            }
        }
    }
    out.flush()?;
    tracing::info!(elapsed_ms = sim.metrics.elapsed().as_millis() as u64, "Done");
    Ok(())
}
