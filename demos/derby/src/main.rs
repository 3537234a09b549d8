//! derby: run one race (or a batch) from the command line.
//!
//! Loads a roster CSV or generates a seeded field, races it under the given
//! going and weather, writes `frames.csv` / `results.csv`, and prints the
//! finishing order.  With `--runs N` it instead simulates N independent
//! races and prints win counts.
//!
//! Set `RUST_LOG=debug` to see lifecycle logging from the library crates.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use race_core::{Competitor, Conditions, RaceConfig, RaceRng, Surface, Weather};
use race_output::{CsvWriter, RaceOutputObserver};
use race_roster::{generate_roster, load_roster_csv};
use race_sim::{
    FixedRateTickSource, ManualTickSource, RaceBuilder, RaceState, TickSource, simulate_batch,
};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Tick cap per race.  Generated fields finish in a few hundred ticks.
const MAX_TICKS:         u64 = 1_000_000;
/// Offset for the roster RNG so the field and the race use distinct streams.
const ROSTER_RNG_OFFSET: u64 = 0x00d3_5b7e;

// ── Options ───────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "derby", version, about = "A tick-based horse race simulator")]
struct Opts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Pace ticks in real time (one tick per `tick_duration_secs`)
    #[arg(long)]
    realtime: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Roster CSV; a random field is generated when omitted
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Number of competitors to generate when no roster is given
    #[arg(short, long, default_value_t = 8)]
    field_size: u32,

    /// RaceConfig JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Track surface: firm, soft or heavy
    #[arg(long, default_value = "firm")]
    surface: Surface,

    /// Weather: clear, rain or mud
    #[arg(long, default_value = "clear")]
    weather: Weather,

    /// Race distance in metres
    #[arg(short, long, default_value_t = 1_200.0)]
    distance: f64,

    /// Number of independent races; more than one prints win counts only
    #[arg(short = 'n', long, default_value_t = 1)]
    runs: u32,

    /// Output directory for frames.csv and results.csv
    #[arg(short, long, default_value = "output/derby")]
    output: PathBuf,

    /// Write every n-th frame
    #[arg(long, default_value_t = 1)]
    frame_interval: u64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    // 1. Configuration.
    let mut config = match &opts.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<RaceConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => RaceConfig::default(),
    };
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }
    config.validate()?;
    log::debug!("{config:?}");

    if !(opts.distance.is_finite() && opts.distance > 0.0) {
        bail!("distance must be positive, got {}", opts.distance);
    }
    let conditions = Conditions::new(opts.surface, opts.weather, opts.distance);

    // 2. Field.
    let field = match &opts.roster {
        Some(path) => load_roster_csv(path)?,
        None => generate_roster(
            opts.field_size,
            &mut RaceRng::new(config.seed).child(ROSTER_RNG_OFFSET),
        ),
    };

    println!("=== derby ===");
    println!(
        "{} runners  |  {} m, {} going, {}  |  seed {}",
        field.len(),
        conditions.distance_m,
        conditions.surface,
        conditions.weather,
        config.seed
    );
    println!();

    // 3. Run.
    if opts.runs > 1 {
        run_batch(&field, &conditions, &config, opts.runs)
    } else {
        run_single(field, &conditions, config, &opts)
    }
}

fn run_single(field: Vec<Competitor>, conditions: &Conditions, config: RaceConfig, opts: &Opts) -> Result<()> {
    let tick_source: Box<dyn TickSource> = if opts.realtime {
        Box::new(FixedRateTickSource::from_hz(1.0 / config.tick_duration_secs))
    } else {
        Box::new(ManualTickSource::new())
    };

    let writer = CsvWriter::new(&opts.output)
        .with_context(|| format!("creating output in {}", opts.output.display()))?;
    let observer = RaceOutputObserver::new(writer, conditions).frame_interval(opts.frame_interval);

    let mut sim = RaceBuilder::new(field, *conditions, tick_source, observer)
        .config(config)
        .build()?;

    let t0 = Instant::now();
    sim.start();
    let state = sim.run_to_finish(MAX_TICKS);
    let wall = t0.elapsed();

    if let Some(e) = sim.observer_mut().take_error() {
        eprintln!("output error: {e}");
    }
    if state != RaceState::Finished {
        bail!("race did not finish within {MAX_TICKS} ticks ({state:?})");
    }

    println!(
        "Finished in {} ({:.3} s wall), {} frames written to {}",
        sim.clock(),
        wall.as_secs_f64(),
        sim.observer().frames_written(),
        opts.output.display()
    );
    println!();

    println!("{:<5} {:<20} {:>6} {:>9} {:>9}", "Rank", "Runner", "Tick", "Time (s)", "Velocity");
    println!("{}", "-".repeat(53));
    for r in sim.results().unwrap_or_default() {
        let name = sim.competitor(r.competitor).map(Competitor::label).unwrap_or_default();
        println!(
            "{:<5} {:<20} {:>6} {:>9.3} {:>9.2}",
            r.rank, name, r.finish_tick.0, r.finish_time_secs, r.final_velocity
        );
    }

    Ok(())
}

fn run_batch(field: &[Competitor], conditions: &Conditions, config: &RaceConfig, runs: u32) -> Result<()> {
    let t0 = Instant::now();
    let summary = simulate_batch(field, conditions, config, runs, MAX_TICKS)?;
    println!(
        "{} races in {:.3} s ({} unfinished)",
        summary.runs,
        t0.elapsed().as_secs_f64(),
        summary.unfinished_runs
    );
    println!();

    println!("{:<20} {:>6} {:>8} {:>8} {:>10}", "Runner", "Wins", "Win %", "Podiums", "Mean rank");
    println!("{}", "-".repeat(56));
    for (c, t) in field.iter().zip(&summary.tallies) {
        println!(
            "{:<20} {:>6} {:>7.1}% {:>8} {:>10}",
            c.label(),
            t.wins,
            t.win_rate() * 100.0,
            t.podiums,
            t.mean_rank().map_or_else(|| "-".to_owned(), |m| format!("{m:.2}")),
        );
    }

    if let Some(fav) = summary.favourite() {
        let name = field
            .iter()
            .find(|c| c.id == fav.competitor)
            .map(Competitor::label)
            .unwrap_or_default();
        println!();
        println!("Favourite: {name}");
    }

    Ok(())
}
