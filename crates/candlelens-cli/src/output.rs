use candlelens_core::CandleReport;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(report: &CandleReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{rendered}");
        }
        OutputFormat::Text => {
            println!(
                "{} ({}) over the last {} trading days",
                report.symbol, report.ticker, report.days
            );
            println!("  bullish:      {}", report.tally.bullish);
            println!("  bearish:      {}", report.tally.bearish);
            println!("  doji:         {}", report.tally.doji);
            println!("  upper shadow: {}", report.tally.upper_shadow);
            println!("  lower shadow: {}", report.tally.lower_shadow);
        }
    }

    Ok(())
}
