use clap::{Parser, Subcommand};
use std::path::PathBuf;

use frontdesk::{RoomType, SortKey};

/// Front-desk CLI: every subcommand opens the data root, performs one
/// operation and reconciles state back to disk on exit.
#[derive(Parser, Debug)]
#[command(
    name = "frontdesk",
    version,
    about = "Hotel front-desk room inventory",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Seed a fresh data root with the stock floor plan (33 rooms)
    Init {
        #[arg(long)]
        path: PathBuf,
    },
    /// Register a guest into an available room
    CheckIn {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        room: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        id_card: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
    },
    /// Check out an occupied room (prompts for confirmation unless --yes)
    CheckOut {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        room: u32,
        /// Skip the interactive confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Find rooms by number, guest name or id card (exactly one criterion)
    Search {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        room: Option<u32>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        id_card: Option<String>,
    },
    /// Occupancy statistics and the accrued-revenue estimate
    Stats {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Reorder the registry (order persists in the snapshot)
    Sort {
        #[arg(long)]
        path: PathBuf,
        #[arg(long, value_enum)]
        by: SortKey,
    },
    /// List rooms
    List {
        #[arg(long)]
        path: PathBuf,
        /// Only bookable rooms
        #[arg(long)]
        available: bool,
        /// Restrict to one room category
        #[arg(long, value_enum)]
        kind: Option<RoomType>,
        #[arg(long)]
        json: bool,
    },
}
