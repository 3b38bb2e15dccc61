use std::{io::Write, process::ExitCode};

use store::Store;

use crate::{
    cli::Command,
    error::Result,
    render::{self, Status},
    settings::Settings,
    shell::Shell,
};

/// Execute one command against the store.
///
/// Rejected operations print their reason and exit with status 1; storage
/// faults are returned as errors.
pub async fn run(store: &Store, settings: &Settings, command: Command) -> Result<ExitCode> {
    let symbol = settings.currency_symbol.as_str();
    let mut out = std::io::stdout().lock();

    match command {
        Command::Add(args) => {
            let result = store.add(&args.name, args.quantity, args.price).await;
            report(&mut out, render::outcome(result, "Item added successfully.")?)
        }
        Command::List { json } => {
            let items = store.list().await?;
            if json {
                serde_json::to_writer_pretty(&mut out, &items)?;
                writeln!(out)?;
            } else if items.is_empty() {
                writeln!(out, "Inventory is empty.")?;
            } else {
                write!(out, "{}", render::inventory_table(&items, symbol))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Update(args) => {
            let result = store.update(&args.name, args.changes()).await;
            report(&mut out, render::outcome(result, "Item updated successfully.")?)
        }
        Command::Remove { name } => {
            let result = store.remove(&name).await;
            report(&mut out, render::outcome(result, "Item removed successfully.")?)
        }
        Command::Total => {
            let total = store.total_value().await?;
            writeln!(out, "{}", render::total_line(symbol, total))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Shell => {
            let input = std::io::stdin().lock();
            Shell::new(store, symbol, input, out).run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report(out: &mut impl Write, status: Status) -> Result<ExitCode> {
    writeln!(out, "{}", status.message())?;
    match status {
        Status::Done(_) => Ok(ExitCode::SUCCESS),
        Status::Rejected(_) => Ok(ExitCode::FAILURE),
    }
}
