use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use glidepath::{Journey, Mapper, Oscillation, demo_journey};

#[derive(Parser, Debug)]
#[command(name = "glidepath", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit the built-in three-city demo journey as JSON.
    Demo(DemoArgs),
    /// Resolve telemetry for a single progress value.
    Sample(SampleArgs),
    /// Resolve telemetry across an evenly spaced progress sweep.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input journey JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll progress in [0, 1]; out-of-range values clamp.
    #[arg(long)]
    progress: f64,

    #[command(flatten)]
    osc: OscArgs,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input journey JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of samples across [0, 1], endpoints included.
    #[arg(long, default_value_t = 11)]
    steps: u32,

    #[command(flatten)]
    osc: OscArgs,
}

#[derive(Parser, Debug)]
struct OscArgs {
    /// Altitude oscillation amplitude in meters.
    #[arg(long)]
    amplitude: Option<f64>,

    /// Altitude oscillation rate in radians per unit progress.
    #[arg(long)]
    rate: Option<f64>,
}

impl OscArgs {
    fn to_oscillation(&self) -> Oscillation {
        let mut osc = Oscillation::default();
        if let Some(amplitude) = self.amplitude {
            osc.amplitude = amplitude;
        }
        if let Some(rate) = self.rate {
            osc.rate = rate;
        }
        osc
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo(args) => cmd_demo(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let journey = demo_journey();
    let json = serde_json::to_string_pretty(&journey)?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write journey '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let journey = Journey::from_path(&args.in_path)?;
    let mapper = Mapper::new(journey, args.osc.to_oscillation())?;
    let snap = mapper.resolve(args.progress);
    println!("{}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps >= 2, "sweep needs at least 2 steps");

    let journey = Journey::from_path(&args.in_path)?;
    let mapper = Mapper::new(journey, args.osc.to_oscillation())?;

    for step in 0..args.steps {
        let progress = f64::from(step) / f64::from(args.steps - 1);
        let snap = mapper.resolve(progress);
        println!("{}", serde_json::to_string(&snap)?);
    }
    Ok(())
}
