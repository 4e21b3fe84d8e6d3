// src/filter.rs
use crate::models::Stock;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Sold,
}

impl StatusFilter {
    pub fn matches(self, stock: &Stock) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => stock.is_active(),
            StatusFilter::Sold => stock.is_sold(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Stocks",
            StatusFilter::Active => "Active",
            StatusFilter::Sold => "Sold",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search text and status filter, ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl StockQuery {
    /// True when neither the search text nor the status narrows the list.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All
    }

    pub fn matches(&self, stock: &Stock) -> bool {
        let name_matches = self.search.is_empty()
            || stock
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        name_matches && self.status.matches(stock)
    }

    pub fn apply<'a>(&self, stocks: &'a [Stock]) -> Vec<&'a Stock> {
        stocks.iter().filter(|stock| self.matches(stock)).collect()
    }
}
