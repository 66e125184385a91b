use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use knockout::competitor::check_count;
use knockout::seeding::canonical_positions;
use knockout::{AdvanceOutcome, Bracket, BracketError, Competitor, RenderConfig, Roster};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "knockout", about = "Seeded single-elimination tournament brackets")]
struct Cli {
    /// Log debug detail to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Characters of each name shown in the bracket grid.
    #[arg(long, global = true, default_value_t = 10)]
    name_width: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seed a new bracket from a raw seed list and draw it.
    Start {
        /// Seed list (`name;wins;losses;ties;seed` per line).
        seeds: PathBuf,
        /// Write the new bracket as a snapshot.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Draw a saved bracket.
    Show {
        /// Saved snapshot.
        snapshot: PathBuf,
    },
    /// Advance winners by seed, in order, and save the result.
    Advance {
        /// Saved snapshot.
        snapshot: PathBuf,
        /// Seeds to advance.
        #[arg(required = true)]
        seeds: Vec<u32>,
        /// Save somewhere other than the input snapshot.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the canonical pairing order for a field of N.
    Order {
        /// Field size (a power of two, at least 2).
        n: usize,
    },
    /// Edit or check a seed list.
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },
}

#[derive(Subcommand, Debug)]
enum RosterAction {
    /// Print every competitor's record card.
    List {
        /// Seed list.
        file: PathBuf,
    },
    /// Check that the list can seed a bracket.
    Check {
        /// Seed list.
        file: PathBuf,
    },
    /// Append a competitor, creating the file if needed.
    Add {
        /// Seed list.
        file: PathBuf,
        /// Competitor name.
        name: String,
        /// Seed rank (1 = top).
        #[arg(long)]
        seed: u32,
        #[arg(long, default_value_t = 0)]
        wins: u32,
        #[arg(long, default_value_t = 0)]
        losses: u32,
        #[arg(long, default_value_t = 0)]
        ties: u32,
    },
    /// Remove the first competitor with this exact name.
    Remove {
        /// Seed list.
        file: PathBuf,
        /// Competitor name.
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let layout = RenderConfig::with_name_width(cli.name_width);

    match cli.command {
        Commands::Start { seeds, save } => run_start(seeds, save, &layout)?,
        Commands::Show { snapshot } => run_show(snapshot, &layout)?,
        Commands::Advance {
            snapshot,
            seeds,
            out,
        } => run_advance(snapshot, seeds, out, &layout)?,
        Commands::Order { n } => run_order(n)?,
        Commands::Roster { action } => run_roster(action)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with_writer(std::io::stderr)
        .init();
}

fn run_start(seeds_path: PathBuf, save_path: Option<PathBuf>, layout: &RenderConfig) -> Result<()> {
    let bracket = knockout::load_new(&seeds_path)
        .with_context(|| format!("failed to seed bracket from {}", seeds_path.display()))?;
    print!("{}", knockout::render_with(&bracket, layout));

    if let Some(path) = save_path {
        knockout::save(&bracket, &path)
            .with_context(|| format!("failed to save bracket to {}", path.display()))?;
        println!("\nSaved to {}", path.display());
    }
    Ok(())
}

fn run_show(snapshot_path: PathBuf, layout: &RenderConfig) -> Result<()> {
    let bracket = knockout::load_saved(&snapshot_path)
        .with_context(|| format!("failed to load bracket from {}", snapshot_path.display()))?;
    print!("{}", knockout::render_with(&bracket, layout));
    println!("\nfingerprint {}", bracket.fingerprint());
    Ok(())
}

fn run_advance(
    snapshot_path: PathBuf,
    seeds: Vec<u32>,
    out_path: Option<PathBuf>,
    layout: &RenderConfig,
) -> Result<()> {
    let mut bracket = knockout::load_saved(&snapshot_path)
        .with_context(|| format!("failed to load bracket from {}", snapshot_path.display()))?;

    let mut changed = false;
    for seed in seeds {
        let outcome = bracket.advance(seed);
        changed |= outcome.is_advanced();
        println!("{}", describe(&bracket, seed, outcome));
    }
    println!();
    print!("{}", knockout::render_with(&bracket, layout));

    if changed {
        let path = out_path.unwrap_or(snapshot_path);
        knockout::save(&bracket, &path)
            .with_context(|| format!("failed to save bracket to {}", path.display()))?;
        info!(path = %path.display(), "bracket updated");
    }
    Ok(())
}

fn describe(bracket: &Bracket, seed: u32, outcome: AdvanceOutcome) -> String {
    let name = bracket
        .competitor(seed)
        .map_or_else(|| "?".to_string(), |c| c.name().to_string());
    match outcome {
        AdvanceOutcome::Advanced => format!("({seed}) {name} advances"),
        AdvanceOutcome::NoOpponentYet => format!("({seed}) {name} is still waiting on an opponent"),
        AdvanceOutcome::Champion(_) => format!("({seed}) {name} wins the final"),
        AdvanceOutcome::NotFound => format!("seed {seed} is not contesting any matchup"),
    }
}

fn run_order(n: usize) -> Result<()> {
    check_count(n).with_context(|| format!("cannot seed a field of {n}"))?;
    let order = canonical_positions(n);
    for (round_match, pair) in order.chunks_exact(2).enumerate() {
        println!("match {}\t{} vs {}", round_match + 1, pair[0], pair[1]);
    }
    Ok(())
}

fn run_roster(action: RosterAction) -> Result<()> {
    match action {
        RosterAction::List { file } => {
            let roster = open_roster(&file)?;
            for competitor in roster.iter() {
                println!("{competitor}\n");
            }
        }
        RosterAction::Check { file } => {
            let roster = open_roster(&file)?;
            roster
                .validate()
                .with_context(|| format!("{} cannot seed a bracket", file.display()))?;
            println!("{} competitors, ready to seed", roster.len());
        }
        RosterAction::Add {
            file,
            name,
            seed,
            wins,
            losses,
            ties,
        } => {
            let mut roster = match Roster::load(&file) {
                Err(BracketError::FileNotFound { .. }) => Roster::new(),
                other => other.with_context(|| format!("failed to open {}", file.display()))?,
            };
            roster.add(Competitor::new(name, wins, losses, ties, seed))?;
            roster
                .save(&file)
                .with_context(|| format!("failed to save {}", file.display()))?;
        }
        RosterAction::Remove { file, name } => {
            let mut roster = open_roster(&file)?;
            if !roster.remove(&name) {
                anyhow::bail!("no competitor named '{}' in {}", name, file.display());
            }
            roster
                .save(&file)
                .with_context(|| format!("failed to save {}", file.display()))?;
        }
    }
    Ok(())
}

fn open_roster(file: &Path) -> Result<Roster> {
    Roster::load(file).with_context(|| format!("failed to open {}", file.display()))
}
