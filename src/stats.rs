// src/stats.rs
use crate::models::Stock;

/// Aggregates over the whole portfolio, not the filtered view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioStats {
    pub total_invested: f64,
    pub total_value: f64,
    pub total_profit_loss: f64,
    pub total_stocks: usize,
    pub active_stocks: usize,
    pub sold_stocks: usize,
}

impl PortfolioStats {
    pub fn from_stocks(stocks: &[Stock]) -> Self {
        stocks.iter().fold(Self::default(), |mut stats, stock| {
            stats.total_invested += stock.invested();
            stats.total_value += stock.current_value();
            stats.total_profit_loss += stock.profit_loss;
            stats.total_stocks += 1;
            if stock.is_sold() {
                stats.sold_stocks += 1;
            } else {
                stats.active_stocks += 1;
            }
            stats
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 {
            Trend::Up
        } else if amount < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}
