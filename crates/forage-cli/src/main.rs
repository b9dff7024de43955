//! Forage CLI.
//!
//! - `forage run` - play decades headlessly with one strategy
//! - `forage compare` - play the same seed with every autonomous strategy
//! - `forage strategies` - list strategy names

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use forage_sim::{BackpackStats, DecadeOutcome, RoundSummary, Session, SimConfig};
use forage_strategies::StrategyKind;

#[derive(Parser)]
#[command(name = "forage")]
#[command(about = "Headless foraging strategy runner", version)]
struct Cli {
    /// YAML config file; defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round with one strategy
    Run {
        /// Manual, Greedy, Backtrack or DP
        #[arg(short, long, default_value = "DP")]
        strategy: StrategyKind,

        #[command(flatten)]
        round: RoundArgs,
    },

    /// Play the same field with every autonomous strategy
    Compare {
        #[command(flatten)]
        round: RoundArgs,
    },

    /// List strategy names
    Strategies,
}

#[derive(clap::Args)]
struct RoundArgs {
    /// Field seed, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of decades to play
    #[arg(long, default_value_t = 6)]
    decades: u32,

    /// Seconds per decision tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    strategy: &'static str,
    seed: u64,
    totals: BackpackStats,
    decades: Vec<RoundSummary>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { strategy, round } => {
            let report = play(&config, strategy, &round)?;
            if round.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_decades(&report);
            }
            Ok(())
        }
        Commands::Compare { round } => {
            let reports = StrategyKind::ALL
                .iter()
                .filter(|kind| kind.is_autonomous())
                .map(|kind| play(&config, *kind, &round))
                .collect::<Result<Vec<_>>>()?;
            if round.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print_comparison(&reports);
            }
            Ok(())
        }
        Commands::Strategies => {
            for kind in StrategyKind::ALL {
                println!("{:<10} {}", kind.name(), kind.label());
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SimConfig::default()),
    }
}

fn play(config: &SimConfig, kind: StrategyKind, round: &RoundArgs) -> Result<Report> {
    let mut config = config.clone();
    if let Some(seed) = round.seed {
        config.seed = seed;
    }
    let seed = config.seed;

    tracing::info!(strategy = kind.name(), seed, "starting round");

    let mut session = Session::new(config, kind).context("Failed to start session")?;
    session
        .run(round.dt, round.decades)
        .with_context(|| format!("{} round failed", kind.name()))?;

    Ok(Report {
        strategy: kind.name(),
        seed,
        totals: session.world().forager.stats,
        decades: session.summaries().to_vec(),
    })
}

fn outcome_label(outcome: &DecadeOutcome) -> String {
    match outcome {
        DecadeOutcome::Completed => "completed".to_string(),
        DecadeOutcome::GameOver { reason } => format!("game over: {reason}"),
    }
}

fn print_decades(report: &Report) {
    println!("{} (seed {})", report.strategy, report.seed);
    println!();
    println!(
        "{:<8} {:>6} {:>6} {:>6} {:>6}  OUTCOME",
        "AGE", "VALUE", "WEIGHT", "STRESS", "ITEMS"
    );
    for decade in &report.decades {
        println!(
            "{:<8} {:>6} {:>6} {:>6} {:>6}  {}",
            format!("{}-{}", decade.age_from, decade.age_to),
            decade.gained.value,
            decade.gained.weight,
            decade.gained.stress,
            decade.gained.items,
            outcome_label(&decade.outcome),
        );
    }
    println!();
    println!(
        "total: value {}, weight {}, stress {}, items {}",
        report.totals.value, report.totals.weight, report.totals.stress, report.totals.items
    );
}

fn print_comparison(reports: &[Report]) {
    println!(
        "{:<10} {:>7} {:>6} {:>6} {:>6} {:>6}  FINAL",
        "STRATEGY", "DECADES", "VALUE", "WEIGHT", "STRESS", "ITEMS"
    );
    for report in reports {
        let last = report
            .decades
            .last()
            .map(|d| outcome_label(&d.outcome))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:>7} {:>6} {:>6} {:>6} {:>6}  {}",
            report.strategy,
            report.decades.len(),
            report.totals.value,
            report.totals.weight,
            report.totals.stress,
            report.totals.items,
            last,
        );
    }
}
