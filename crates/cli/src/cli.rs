use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::STORE_ENV;

/// Gold Ledger - find the cheapest gold package by unit cost
#[derive(Parser, Debug)]
#[command(name = "gold-ledger")]
#[command(about = "Rank in-game gold packages by price per gold")]
#[command(version)]
pub struct Cli {
    /// Path to the storage file (defaults to the platform data directory)
    #[arg(long, global = true, env = STORE_ENV)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show all packages, cheapest unit cost first (default)
    List,
    /// Add a package. Invalid amounts are ignored.
    Add {
        /// Gold amount in the package
        #[arg(allow_hyphen_values = true)]
        gold: String,
        /// Price of the package in dollars
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Delete a package by id
    Remove {
        /// Id shown in the table
        id: u64,
    },
    /// Enter packages one after another at a prompt
    Interactive,
}
