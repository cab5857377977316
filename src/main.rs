use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use bst_avl::report::Report;
use bst_avl::roster::Roster;

/// Loads a hiring roster into an unbalanced BST and an AVL tree and reports how both trees look
/// after each week.
#[derive(Parser)]
#[command(name = "roster", version)]
struct Cli {
    /// Three lines of employee ids: first week acceptances, new acceptances, declines.
    #[arg(long, default_value = "inputPS03.txt")]
    input: PathBuf,

    /// Where to write the report.
    #[arg(long, default_value = "OutputPS03.txt")]
    output: PathBuf,

    /// How many remaining employees to locate in the AVL tree.
    #[arg(long, default_value_t = 3)]
    sample: usize,

    /// Seed for picking employees, for reproducible reports.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let roster = Roster::parse(&input)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    let selected = match cli.seed {
        Some(seed) => roster.sample(&mut StdRng::seed_from_u64(seed), cli.sample),
        None => roster.sample(&mut thread_rng(), cli.sample),
    };
    info!("locating {:?}", selected);

    let report = Report::build(&roster, &selected);
    fs::write(&cli.output, report.to_string())
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!("wrote {}", cli.output.display());

    Ok(())
}
