mod logging;

use anyhow::{bail, Context, Result};
use cat_arena_core::config::SimConfig;
use cat_arena_core::driver::FrameDriver;
use cat_arena_core::render::RecordingPresenter;
use cat_arena_core::sweep::run_seed_sweep;
use cat_arena_core::world::World;
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

const WARMUP_STEPS: usize = 10;
const BENCHMARK_STEPS: usize = 2_000;
const TARGET_TPS: f64 = 60.0;

#[derive(Parser)]
#[command(name = "cat-arena")]
#[command(about = "Autonomous cat arena simulation CLI")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single simulation and report sampled metrics
    Run {
        /// Path to config file (JSON); defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for summary.json (optional)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 3600)]
        steps: usize,

        /// Record metrics every N ticks
        #[arg(long, default_value_t = 60)]
        sample_every: usize,
    },
    /// Drive the frame loop and dump every frame's draw commands as JSON
    Frames {
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of frames to render
        #[arg(long, default_value_t = 60)]
        frames: usize,

        /// Output file for the JSON frame list
        #[arg(long)]
        out: PathBuf,
    },
    /// Run the same config under consecutive seeds in parallel
    Sweep {
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of seeds, starting at the config seed
        #[arg(long)]
        seeds: u64,

        #[arg(long, default_value_t = 3600)]
        steps: usize,

        #[arg(long, default_value_t = 600)]
        sample_every: usize,

        /// Output directory for sweep.json (optional)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Measure tick throughput at several population sizes
    Benchmark,
    /// Dump the default configuration to stdout
    DumpDefaultConfig,
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let config = match path {
        Some(path) => {
            let file = File::open(path).context("failed to open config file")?;
            let config: SimConfig = serde_json::from_reader(BufReader::new(file))
                .context("failed to parse config")?;
            info!("loaded config from {}", path.display());
            config
        }
        None => SimConfig::default(),
    };
    config.validate().context("config validation error")?;
    Ok(config)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, value)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn run_benchmark(num_agents: usize) -> Result<()> {
    let config = SimConfig {
        num_agents,
        ..SimConfig::default()
    };
    let mut world = World::try_new(config).context("failed to initialize world")?;

    for _ in 0..WARMUP_STEPS {
        world.step();
    }

    let mut total_update = 0u64;
    let mut total_time = 0u64;
    for _ in 0..BENCHMARK_STEPS {
        let timings = world.step();
        total_update += timings.update_us;
        total_time += timings.total_us;
    }

    let avg_step_us = (total_time as f64 / BENCHMARK_STEPS as f64).max(f64::EPSILON);
    let ticks_per_sec = 1_000_000.0 / avg_step_us;
    println!("--- {num_agents} cats ---");
    println!("  Avg tick:      {avg_step_us:.1} us ({ticks_per_sec:.0} ticks/sec)");
    println!(
        "  Update share:  {:.1} us",
        total_update as f64 / BENCHMARK_STEPS as f64
    );
    let verdict = if ticks_per_sec >= TARGET_TPS {
        "GO"
    } else {
        "NO-GO"
    };
    println!("  Verdict:       {verdict} (target: >={TARGET_TPS} ticks/sec)");
    let counts = world.state_counts();
    println!(
        "  States:        drinking={} sleeping={} playing={} wandering={}",
        counts.drinking, counts.sleeping, counts.playing, counts.wandering
    );
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::DumpDefaultConfig => {
            let config = SimConfig::default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Benchmark => {
            if cfg!(debug_assertions) {
                eprintln!("WARNING: running in debug mode. Results are not representative.");
                eprintln!("         Use: cargo run -p cat-arena-cli --release -- benchmark");
                eprintln!();
            }
            println!("=== Cat Arena Tick Benchmark ===");
            println!("Warmup: {WARMUP_STEPS} ticks, Benchmark: {BENCHMARK_STEPS} ticks");
            println!();
            for num_agents in [10, 50, 200, 1000] {
                run_benchmark(num_agents)?;
            }
        }
        Commands::Run {
            config,
            out,
            steps,
            sample_every,
        } => {
            let sim_config = load_config(config.as_deref())?;
            info!("simulating {steps} ticks");
            let mut world = World::try_new(sim_config).context("failed to initialize world")?;
            let summary = world
                .run_experiment(steps, sample_every)
                .context("invalid experiment parameters")?;

            if let Some(out_dir) = out {
                std::fs::create_dir_all(&out_dir).context("failed to create output directory")?;
                write_json(&out_dir.join("summary.json"), &summary)?;
                println!("Run complete. Results saved to {}", out_dir.display());
            } else {
                let c = summary.final_state_counts;
                println!(
                    "Run complete. Milk drunk: {:.1}, drinking={} sleeping={} playing={} wandering={}",
                    summary.total_milk_drunk, c.drinking, c.sleeping, c.playing, c.wandering
                );
            }
        }
        Commands::Frames {
            config,
            frames,
            out,
        } => {
            let sim_config = load_config(config.as_deref())?;
            let world = World::try_new(sim_config).context("failed to initialize world")?;
            let mut driver = FrameDriver::new(world, RecordingPresenter::default());
            let start = Instant::now();
            driver.run(frames);
            info!("rendered {frames} frames in {:?}", start.elapsed());
            let (_, presenter) = driver.into_parts();
            write_json(&out, &presenter.frames)?;
            println!("Wrote {frames} frames to {}", out.display());
        }
        Commands::Sweep {
            config,
            seeds,
            steps,
            sample_every,
            out,
        } => {
            if seeds == 0 {
                bail!("--seeds must be positive");
            }
            let base = load_config(config.as_deref())?;
            let seed_list: Vec<u64> = (0..seeds).map(|i| base.seed.wrapping_add(i)).collect();
            let summaries = run_seed_sweep(&base, &seed_list, steps, sample_every)
                .context("seed sweep failed")?;

            for summary in &summaries {
                let c = summary.final_state_counts;
                println!(
                    "seed {:>6}: milk={:>8.1} hits={:>6} drinking={} sleeping={} playing={}",
                    summary.seed,
                    summary.total_milk_drunk,
                    summary.total_ball_hits,
                    c.drinking,
                    c.sleeping,
                    c.playing
                );
            }
            if let Some(out_dir) = out {
                std::fs::create_dir_all(&out_dir).context("failed to create output directory")?;
                write_json(&out_dir.join("sweep.json"), &summaries)?;
                println!("Sweep results saved to {}", out_dir.display());
            }
        }
    }
    Ok(())
}
