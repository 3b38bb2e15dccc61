use std::process::ExitCode;

use clap::Parser;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use store::Store;

use crate::{
    cli::{Cli, Command},
    error::Result,
    settings::Settings,
};

mod cli;
mod commands;
mod error;
mod render;
mod settings;
mod shell;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "inventory={level},store={level},migration={level}",
            level = settings.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    let db = match connect_database(&settings).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to open database {}: {err}", settings.database_url);
            return Err(err);
        }
    };
    let store = Store::builder().database(db).build().await?;
    tracing::debug!(database_url = %settings.database_url, "store ready");

    let command = cli.command.unwrap_or(Command::Shell);
    commands::run(&store, &settings, command).await
}

async fn connect_database(settings: &Settings) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(settings.database_url.clone());
    options
        .max_connections(settings.max_connections)
        .sqlx_logging(false);
    let database = Database::connect(options).await?;
    Ok(database)
}
