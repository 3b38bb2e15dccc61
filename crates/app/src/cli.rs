use clap::{Args, Parser, Subcommand};
use store::{ItemUpdate, Money};

#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(about = "Single-user inventory ledger backed by SQLite")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the database URL (e.g. sqlite:./inventory.db?mode=rwc).
    #[arg(long, global = true)]
    pub database_url: Option<String>,
    /// Override the log level (e.g. debug).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Runs the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new item.
    Add(AddArgs),
    /// Show every item with its total value.
    List {
        /// Print the items as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Change the name, quantity or unit price of an item.
    Update(UpdateArgs),
    /// Remove an item.
    Remove { name: String },
    /// Print the total value of the inventory.
    Total,
    /// Interactive numbered menu.
    Shell,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub name: String,
    pub quantity: i64,
    /// Unit price, e.g. 2.50
    pub price: Money,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Current name of the item.
    pub name: String,
    /// Rename the item.
    #[arg(long = "name")]
    pub new_name: Option<String>,
    #[arg(long)]
    pub quantity: Option<i64>,
    #[arg(long)]
    pub price: Option<Money>,
}

impl UpdateArgs {
    pub fn changes(&self) -> ItemUpdate {
        ItemUpdate {
            name: self.new_name.clone(),
            quantity: self.quantity,
            unit_price: self.price,
        }
    }
}
