pub mod analyze;

use candlelens_core::CandleReport;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<CandleReport, CliError> {
    match &cli.command {
        Command::Analyze(args) => analyze::run(args).await,
    }
}
