//! Casting command line tool.
//!
//! Reads a problem from stdin (or `--input`), writes the report to stdout.
//! Console logging goes to stderr.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use casting::{parse_problem, solve, verify, write_report, SolverConfig};

/// Configuration file picked up from the working directory.
const DEFAULT_CONFIG: &str = "casting.toml";

/// Casting command line arguments.
#[derive(Parser, Debug)]
#[command(name = "casting", version)]
#[command(about = "Assign actors to roles, keeping the divas apart")]
struct Args {
    /// Problem file (defaults to stdin)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Solver configuration, TOML or YAML by extension
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Merge attempts per role in the repair phase
    #[arg(long, value_name = "N")]
    attempts_per_role: Option<u64>,

    /// Re-check the report against the problem before printing it
    #[arg(long)]
    verify: bool,

    /// Disable console logging
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if !args.quiet {
        casting::console::init();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("casting: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> casting::Result<()> {
    let config = load_config(args)?;

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let problem = parse_problem(&input)?;
    let result = solve(&problem, &config);

    if args.verify {
        verify(&problem, &result.report)?;
    }

    write_report(&result.report, io::stdout().lock())
}

fn load_config(args: &Args) -> casting::Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => SolverConfig::load(DEFAULT_CONFIG)?,
        None => SolverConfig::default(),
    };

    if let Some(seed) = args.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(attempts) = args.attempts_per_role {
        config = config.with_attempts_per_role(attempts);
        config.validate()?;
    }
    Ok(config)
}
