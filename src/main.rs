//! sumfact — addition-fact CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::Result;
use clap::Parser;

use cli::args::Cli;
use sumfact::{arith, message};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let sum = arith::add(cli.lhs, cli.rhs)?;
    println!("{}", message::render(cli.lhs, cli.rhs, sum));

    Ok(())
}
