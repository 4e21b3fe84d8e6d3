// src/chart.rs
use crate::models::Stock;

const PROFIT_LOSS_LABEL_LEN: usize = 8;
const COMPOSITION_LABEL_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLossBar {
    pub label: String,
    pub profit_loss: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositionSlice {
    pub label: String,
    pub value: f64,
    /// Share of total invested capital, in 0.0..=1.0.
    pub share: f64,
}

pub fn profit_loss_bars(stocks: &[Stock]) -> Vec<ProfitLossBar> {
    stocks
        .iter()
        .map(|stock| ProfitLossBar {
            label: truncate_label(&stock.name, PROFIT_LOSS_LABEL_LEN),
            profit_loss: stock.profit_loss,
        })
        .collect()
}

/// Portfolio composition by invested capital.
pub fn composition(stocks: &[Stock]) -> Vec<CompositionSlice> {
    let total: f64 = stocks.iter().map(Stock::invested).sum();

    stocks
        .iter()
        .map(|stock| {
            let value = stock.invested();
            CompositionSlice {
                label: truncate_label(&stock.name, COMPOSITION_LABEL_LEN),
                value,
                share: if total > 0.0 { value / total } else { 0.0 },
            }
        })
        .collect()
}

fn truncate_label(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{active, sold};

    #[test]
    fn bars_carry_backend_profit_loss() {
        let stocks = vec![
            active(1, "Apple", 10, 100.0, 50.0),
            sold(2, "Microsoft Corporation", 3, 200.0, 250.0, 150.0),
        ];
        let bars = profit_loss_bars(&stocks);

        assert_eq!(bars[0].label, "Apple");
        assert_eq!(bars[0].profit_loss, 50.0);
        assert_eq!(bars[1].label, "Microsof...");
    }

    #[test]
    fn composition_shares_sum_to_one() {
        let stocks = vec![
            active(1, "Apple", 10, 100.0, 0.0),
            active(2, "Berkshire Hathaway", 1, 3000.0, 0.0),
        ];
        let slices = composition(&stocks);

        assert_eq!(slices[0].value, 1000.0);
        assert_eq!(slices[1].label, "Berkshire ...");
        assert!((slices[0].share - 0.25).abs() < 1e-9);
        assert!((slices.iter().map(|s| s.share).sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_has_zero_shares() {
        let slices = composition(&[active(1, "Gift", 3, 0.0, 0.0)]);
        assert_eq!(slices[0].share, 0.0);
    }

    #[test]
    fn labels_truncate_on_char_boundaries() {
        assert_eq!(truncate_label("Société Générale", 8), "Société ...");
        assert_eq!(truncate_label("exactly8", 8), "exactly8");
    }
}
