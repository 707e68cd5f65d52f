//! Gold Ledger - terminal front end
//!
//! Restores the package list, applies one command, prints the ranked table.

mod cli;
mod config;
mod form;
mod interactive;
mod logging;
mod render;

use clap::Parser;
use gold_ledger_core::PackageLedger;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::form::EntryForm;

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    debug!(?cli, "arguments parsed");

    let store = config::open_store(cli.store);
    let mut ledger = PackageLedger::restore(store);

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {}
        Commands::Add { gold, price } => {
            // Invalid input is a silent no-op, same as the entry form.
            EntryForm::with_values(gold, price).submit(&mut ledger);
        }
        Commands::Remove { id } => {
            ledger.remove(id);
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            return interactive::run(&mut ledger, stdin.lock(), std::io::stdout().lock());
        }
    }

    print!("{}", render::render_table(&ledger.ranked()));
    Ok(())
}
