//! `raises` - group a 7th Sea roll for the most raises.

mod error;
mod input;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use owo_colors::OwoColorize;
use raises::{ScoringMode, Solver, SolverConfig, ThreadCount};

use crate::error::{CliError, Result};
use crate::output::Report;

const DEFAULT_CONFIG_FILE: &str = "raises.toml";

#[derive(Debug, Parser)]
#[command(name = "raises")]
#[command(about = "Group a 7th Sea dice roll for the most raises", version)]
struct Cli {
    /// Dice faces, e.g. "9+1, 6+4" or 9 1 6 4
    dice: Vec<String>,

    /// Count a group of 15 or more as two raises
    #[arg(long)]
    fifteens: bool,

    /// Search time budget in milliseconds
    #[arg(long, value_name = "MS")]
    budget_ms: Option<u64>,

    /// Stop after exploring this many search nodes
    #[arg(long, value_name = "N")]
    node_limit: Option<u64>,

    /// Search threads (0 = all cores)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Solver configuration file (TOML, or YAML by extension)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Roll this many d10 instead of reading dice
    #[arg(long, value_name = "N")]
    roll: Option<usize>,

    /// Seed for --roll
    #[arg(long, requires = "roll")]
    seed: Option<u64>,

    /// Skip reserving guaranteed groups before the search
    #[arg(long)]
    no_reduction: bool,

    /// Log solver progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn mode(&self) -> ScoringMode {
        ScoringMode::from_fifteens_flag(self.fifteens)
    }

    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(ms) = self.budget_ms {
            config = config.with_time_limit(Duration::from_millis(ms));
        }
        if let Some(nodes) = self.node_limit {
            config = config.with_node_limit(nodes);
        }
        if let Some(threads) = self.threads {
            config = config.with_thread_count(match threads {
                0 => ThreadCount::Auto,
                n => ThreadCount::Count(n),
            });
        }
        if self.no_reduction {
            config = config.with_reduction(false);
        }
        Ok(config)
    }
}

fn load_config(path: Option<&Path>) -> Result<SolverConfig> {
    let Some(path) = path else {
        return Ok(SolverConfig::load(DEFAULT_CONFIG_FILE).unwrap_or_default());
    };

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let loaded = if is_yaml {
        SolverConfig::from_yaml_file(path)
    } else {
        SolverConfig::from_toml_file(path)
    };
    loaded.map_err(|source| CliError::Config {
        path: path.display().to_string(),
        source,
    })
}

fn run(cli: &Cli) -> Result<String> {
    let (dice, seed) = match cli.roll {
        Some(_) if !cli.dice.is_empty() => return Err(CliError::ConflictingInput),
        Some(count) => {
            let seed = cli.seed.unwrap_or_else(input::random_seed);
            (input::roll_dice(count, seed), Some(seed))
        }
        None => (input::parse_dice(&cli.dice.join(","))?, None),
    };

    if cli.verbose {
        raises::console::init();
    }

    let mut solver = Solver::new(cli.solver_config()?);
    let result = solver.solve(&dice, cli.mode())?;

    if cli.json {
        output::render_json(&Report::new(&dice, &result, seed))
    } else {
        Ok(output::render_text(&dice, &result, seed))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            print!("{}", out);
            if cli.json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
