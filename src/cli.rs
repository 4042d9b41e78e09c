use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use tchisla::{ExecutionMode, SearchConfig, Solver, report, validate_base_digit};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Shard execution mode for the CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Parallel,
    Sequential,
}

impl ModeArg {
    pub fn to_execution_mode(self) -> ExecutionMode {
        match self {
            ModeArg::Parallel => ExecutionMode::Parallel,
            ModeArg::Sequential => ExecutionMode::Sequential,
        }
    }
}

/// Tchisla - find how many copies of a digit build a target number
#[derive(Parser, Debug)]
#[command(name = "tchisla")]
#[command(about = "Find a construction of a target value from repeated copies of a single digit")]
#[command(version)]
pub struct CliArgs {
    /// Target value to construct
    #[arg(long)]
    pub y: i64,

    /// Base digit used for the construction (1-9)
    #[arg(long)]
    pub x: u32,

    /// Maximum number of digit uses
    #[arg(long)]
    pub max_c: u32,

    /// Maximum chained unary applications per new value
    #[arg(long, default_value_t = 1)]
    pub max_u: u32,

    /// Number of parallel workers
    #[arg(long, default_value_t = 8)]
    pub workers: usize,

    /// How worker shards are executed
    #[arg(long, value_enum, default_value = "parallel")]
    pub mode: ModeArg,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    validate_base_digit(args.x).context("Invalid base digit")?;

    let config = SearchConfig {
        max_cost: args.max_c,
        max_unary_depth: args.max_u,
        workers: args.workers,
        mode: args.mode.to_execution_mode(),
        ..SearchConfig::default()
    };
    let solver = Solver::new(config);

    println!("--- Parameters ---");
    println!("Target Value : {}", args.y);
    println!("Base Digit   : {}", args.x);
    println!("Max Cost     : {}", args.max_c);
    println!("Max Unary    : {}", args.max_u);
    println!("Workers      : {}", args.workers);

    info!(
        "Searching for {} built from at most {} copies of {}",
        args.y, args.max_c, args.x
    );

    let outcome = solver.solve(args.x, args.y as f64).context("Search failed")?;

    match outcome.cost {
        Some(cost) => {
            println!();
            println!("--- Report ---");
            for layer in report::reconstruct(args.y as f64, &outcome.memo) {
                println!("{}", layer.join("; "));
            }
            println!("{} # {} = {}", args.y, args.x, cost);
            Ok(())
        }
        None => {
            warn!("Search space exhausted without reaching the target");
            println!("Tchisla failed: no construction within cost {}.", args.max_c);
            Ok(())
        }
    }
}
