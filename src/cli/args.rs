//! Clap argument types for the addition command.

use clap::Parser;

use sumfact::constants;

/// Add two integers and print the addition fact.
#[derive(Parser, Debug)]
#[command(
    name = constants::APP_NAME,
    version,
    about = "Adds two integers and prints the result message",
)]
pub struct Cli {
    /// First operand.
    #[arg(
        value_name = "LHS",
        default_value_t = constants::DEFAULT_LHS,
        allow_negative_numbers = true,
    )]
    pub lhs: i64,

    /// Second operand.
    #[arg(
        value_name = "RHS",
        default_value_t = constants::DEFAULT_RHS,
        allow_negative_numbers = true,
    )]
    pub rhs: i64,
}
