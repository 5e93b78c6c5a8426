use anyhow::Result;
use clap::Parser;

mod args;

use args::{Cli, Commands};
use bigint_cli::commands::{bytes, eval};
use bigint_cli::repl;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Eval { expr, radix } => eval::eval_command(expr, *radix),
        Commands::Bytes { value, order } => bytes::bytes_command(value, (*order).into()),
        Commands::FromBytes { hex, order } => bytes::from_bytes_command(hex, (*order).into()),
        Commands::Repl { file, radix } => repl::run_repl(file.as_deref(), *radix),
    }
}
