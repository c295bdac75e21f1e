// trading-core/src/simulation/metrics.rs

use trading_common::data::types::{PerformanceSummary, SimulatedTrade};

/// Win/loss aggregation over the trades of a run
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceEvaluator;

impl PerformanceEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, trades: &[SimulatedTrade]) -> PerformanceSummary {
        let total_trades = trades.len();
        let wins = trades.iter().filter(|t| t.success).count();

        PerformanceSummary {
            total_trades,
            wins,
            losses: total_trades - wins,
            win_rate: self.calculate_win_rate(wins, total_trades),
        }
    }

    /// Fraction in [0, 1]; zero when nothing traded
    fn calculate_win_rate(&self, winning_trades: usize, total_trades: usize) -> f64 {
        if total_trades == 0 {
            return 0.0;
        }

        winning_trades as f64 / total_trades as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trading_common::data::types::AssetSymbol;

    fn trade(entry_price: f64, exit_price: f64) -> SimulatedTrade {
        SimulatedTrade {
            asset: AssetSymbol::new("BTC").unwrap(),
            entry_price,
            exit_price,
            success: exit_price > entry_price,
        }
    }

    #[test]
    fn test_two_wins_of_three() {
        let trades = vec![trade(100.0, 101.0), trade(100.0, 99.0), trade(50.0, 55.0)];

        let summary = PerformanceEvaluator::new().evaluate(&trades);

        assert_eq!(summary.total_trades, 3);
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.win_rate, 2.0 / 3.0);
    }

    #[test]
    fn test_empty_run_has_zero_win_rate() {
        let summary = PerformanceEvaluator::new().evaluate(&[]);

        assert_eq!(summary, PerformanceSummary::default());
        assert_eq!(summary.win_rate, 0.0);
    }
}
