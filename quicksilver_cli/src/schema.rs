use std::path::PathBuf;

use clap::Args;
use quicksilver_dispatch::json::schema::{generate_json_schema, generate_response_json_schema};

#[derive(Args)]
pub struct SchemaArgs {
    /// Output file, printed to stdout when omitted
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Emit the response schema instead of the request schema
    #[arg(long)]
    response: bool,
}

pub fn run(args: SchemaArgs) -> Result<(), anyhow::Error> {
    let schema = if args.response {
        generate_response_json_schema()?
    } else {
        generate_json_schema()?
    };

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
        None => println!("{schema}"),
    }

    Ok(())
}
