//! Animates two wandering circles and writes one SVG per step.
//!
//! Run with: cargo run --example animate -- --steps 300 --out frames

use circlecross::render::render_frame;
use circlecross::{Relationship, Simulation, SimulationConfig};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = "animate")]
#[command(about = "Render the crossing points of two moving circles as SVG frames")]
struct Args {
    /// Number of frames to render.
    #[arg(long, default_value = "200")]
    steps: usize,

    /// Directory the frames are written to.
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// JSON configuration file; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the initial placement (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Classification tolerance (overrides the config file).
    #[arg(long)]
    tolerance: Option<f64>,

    /// Also write every frame as one JSON object per line.
    #[arg(long)]
    trace: Option<PathBuf>,
}

fn load_config(args: &Args) -> CliResult<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config: {}", path.display());
            SimulationConfig::from_json_str(&std::fs::read_to_string(path)?)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut sim = Simulation::new(config.clone())?;

    std::fs::create_dir_all(&args.out)?;
    let mut trace = match &args.trace {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let mut counts = [0usize; Relationship::ALL.len()];
    for _ in 0..args.steps {
        let frame = sim.step()?;

        let path = args.out.join(format!("frame_{:04}.svg", frame.step));
        std::fs::write(&path, render_frame(&frame, &config))?;

        if let Some(writer) = trace.as_mut() {
            serde_json::to_writer(&mut *writer, &frame)?;
            writer.write_all(b"\n")?;
        }

        if let Some(slot) = Relationship::ALL
            .iter()
            .position(|rel| *rel == frame.intersection.relationship)
        {
            counts[slot] += 1;
        }
    }

    if let Some(mut writer) = trace {
        writer.flush()?;
    }

    tracing::info!("Wrote {} frames to {}", args.steps, args.out.display());
    for (rel, count) in Relationship::ALL.iter().zip(counts) {
        if count > 0 {
            tracing::info!("  {:<20} {}", rel.label(), count);
        }
    }

    Ok(())
}
