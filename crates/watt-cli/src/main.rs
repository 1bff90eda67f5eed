mod cmd_quote;
mod cmd_session;
mod cmd_tariff;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "watt", version, about = "Tiered electricity billing sessions")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an interactive billing session (add, view, save, quit)
    Session {
        /// File that "save to file" appends to
        #[arg(long, default_value = "bills.txt")]
        output: PathBuf,
    },
    /// Price a unit count against the tariff, without a session
    Quote {
        /// Units consumed
        #[arg(allow_negative_numbers = true)]
        units: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the rate schedule
    Tariff,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Session { output } => cmd_session::execute(&output),
        Command::Quote { units, json } => cmd_quote::execute(units, json),
        Command::Tariff => cmd_tariff::execute(),
    }
}
