use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{schema::SchemaArgs, solve::SolveArgs};

mod parsers;
mod schema;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign the tasks of a request file to its couriers
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Write the JSON schema of requests or responses
    Schema {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Solve { args } => solve::run(args)?,
        Commands::Schema { args } => schema::run(args)?,
    }

    Ok(())
}
