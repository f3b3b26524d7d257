//! Provider adapters implementing [`BarSource`](crate::BarSource).

mod yahoo;

pub use yahoo::YahooChartAdapter;
