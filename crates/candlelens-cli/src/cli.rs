use clap::{Args, Parser, Subcommand, ValueEnum};

/// Classify daily candles for a ticker over a look-back window.
#[derive(Debug, Parser)]
#[command(name = "candlelens", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for machine or human consumption.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count bullish/bearish/doji and shadow days for a symbol.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Human-entered symbol, e.g. "700 HK", "NVDA US", or "AAPL".
    pub symbol: String,

    /// Look-back window in trading days (clamped to 1..=252).
    #[arg(long, default_value_t = 20)]
    pub days: i64,

    /// Doji tolerance relative to the open price.
    #[arg(long, default_value_t = 0.001)]
    pub doji_tolerance: f64,

    /// Absolute wick length a shadow must exceed.
    #[arg(long, default_value_t = 0.0)]
    pub shadow_tolerance: f64,

    /// Use the deterministic offline data source instead of the provider.
    #[arg(long)]
    pub offline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
