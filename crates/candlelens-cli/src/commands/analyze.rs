use std::sync::Arc;

use candlelens_core::{
    AnalyzerConfig, CandleAnalyzer, CandleReport, CandleTolerances, HttpClient, NoopHttpClient,
    ReqwestHttpClient, YahooChartAdapter,
};

use crate::cli::AnalyzeArgs;
use crate::error::CliError;

pub async fn run(args: &AnalyzeArgs) -> Result<CandleReport, CliError> {
    let tolerances = CandleTolerances::new(args.doji_tolerance, args.shadow_tolerance)?;
    let config = AnalyzerConfig {
        tolerances,
        ..AnalyzerConfig::default()
    };

    let transport: Arc<dyn HttpClient> = if args.offline {
        Arc::new(NoopHttpClient)
    } else {
        Arc::new(ReqwestHttpClient::new())
    };
    let source = Arc::new(YahooChartAdapter::with_http_client(transport));
    let analyzer = CandleAnalyzer::new(source, config);

    Ok(analyzer.analyze(&args.symbol, args.days).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_analysis_produces_a_full_report() {
        let args = AnalyzeArgs {
            symbol: String::from("700 HK"),
            days: 20,
            doji_tolerance: 0.001,
            shadow_tolerance: 0.0,
            offline: true,
        };

        let report = run(&args).await.expect("report");
        assert_eq!(report.ticker.as_str(), "0700.HK");
        assert_eq!(report.days, 20);
        let tally = report.tally;
        assert!(tally.bullish + tally.bearish + tally.doji <= report.days);
    }

    #[tokio::test]
    async fn invalid_tolerance_is_rejected() {
        let args = AnalyzeArgs {
            symbol: String::from("AAPL"),
            days: 20,
            doji_tolerance: -1.0,
            shadow_tolerance: 0.0,
            offline: true,
        };

        let err = run(&args).await.expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }
}
