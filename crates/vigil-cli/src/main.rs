//! CLI frontend for the Vigil encounter mechanics.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vigil",
    about = "Vigil — dice-pool and turn-order mechanics for tabletop encounters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice pool and print the scored outcome
    Roll {
        /// Pool spec like "2d6 3d8"
        spec: String,

        /// Target number for threshold scoring
        #[arg(short, long, default_value = "3")]
        threshold: u32,

        /// Score by the single highest die instead of a target number
        #[arg(long)]
        highest: bool,

        /// Reroll the first die showing a 1, then rescore
        #[arg(long)]
        reroll_ones: bool,

        /// RNG seed for deterministic rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Roll initiative for an encounter and print the turn order
    Initiative {
        /// Encounter JSON file (default: a built-in demo encounter)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Order by side buckets instead of individual roll keys
        #[arg(long)]
        team: bool,

        /// Side partition rule: pc_vs_npc, npc_vs_pc, allies_vs_enemies,
        /// enemies_vs_allies, pcs_allies_enemies, enemies_pcs_allies
        #[arg(short, long)]
        mode: Option<String>,

        /// Fixed target number overriding distance-derived thresholds
        #[arg(long, default_value = "0")]
        manual_threshold: u32,

        /// RNG seed for deterministic rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Also print the individual roll reports
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect the condition catalog
    Conditions {
        #[command(subcommand)]
        command: ConditionsCommand,
    },
}

#[derive(Subcommand)]
enum ConditionsCommand {
    /// List the full catalog
    List,

    /// Resolve an id or label to its catalog entry
    Show {
        /// Condition id or label (case and spacing are ignored)
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            spec,
            threshold,
            highest,
            reroll_ones,
            seed,
        } => commands::roll::run(&spec, threshold, highest, reroll_ones, seed),
        Commands::Initiative {
            file,
            team,
            mode,
            manual_threshold,
            seed,
            verbose,
        } => commands::initiative::run(
            file.as_deref(),
            team,
            mode.as_deref(),
            manual_threshold,
            seed,
            verbose,
        ),
        Commands::Conditions { command } => match command {
            ConditionsCommand::List => commands::conditions::list(),
            ConditionsCommand::Show { id } => commands::conditions::show(&id),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
