// src/view.rs
use crate::chart::{composition, profit_loss_bars};
use crate::dashboard::{EmptyState, FormMode};
use crate::models::Stock;
use crate::stats::{PortfolioStats, Trend};
use chrono::NaiveDate;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Formats an amount as US dollars, e.g. `$1,234.50` or `-$12.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = format!("{:.2}", amount.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, fraction)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "+",
        Trend::Down => "-",
        Trend::Neutral => " ",
    }
}

pub fn render_stats(stats: &PortfolioStats) -> String {
    let pl_trend = if stats.total_profit_loss >= 0.0 {
        Trend::Up
    } else {
        Trend::Down
    };
    let cards = [
        (
            "Total Invested",
            format_currency(stats.total_invested),
            "Total amount invested",
            Trend::Neutral,
        ),
        (
            "Current Value",
            format_currency(stats.total_value),
            "Total portfolio value",
            Trend::Up,
        ),
        (
            "Total P&L",
            format_currency(stats.total_profit_loss),
            "Profit or Loss",
            pl_trend,
        ),
        (
            "Total Stocks",
            stats.total_stocks.to_string(),
            "All positions",
            Trend::Neutral,
        ),
        (
            "Active Positions",
            stats.active_stocks.to_string(),
            "Currently held",
            Trend::Neutral,
        ),
        (
            "Sold Positions",
            stats.sold_stocks.to_string(),
            "Completed trades",
            Trend::Up,
        ),
    ];

    let mut out = String::new();
    for (title, value, subtitle, trend) in cards {
        let _ = writeln!(
            out,
            "{} {:<18}{:>16}  {}",
            trend_marker(trend),
            title,
            value,
            subtitle
        );
    }
    out
}

pub fn render_stock_table(stocks: &[&Stock]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<20} {:>6} {:>12} {:>14} {:>12} {:>14} {:>14} {:>8}",
        "ID", "NAME", "QTY", "BUY PRICE", "BUY DATE", "SELL PRICE", "SELL DATE", "P&L", "STATUS"
    );
    for stock in stocks {
        let (sell_price, sell_date) = match (stock.sell_price, stock.sell_date) {
            (Some(price), Some(date)) => (format_currency(price), format_date(date)),
            _ => ("-".to_string(), "-".to_string()),
        };
        let _ = writeln!(
            out,
            "{:>5}  {:<20} {:>6} {:>12} {:>14} {:>12} {:>14} {:>13}{} {:>8}",
            stock.id,
            stock.name,
            stock.quantity,
            format_currency(stock.buy_price),
            format_date(stock.buy_date),
            sell_price,
            sell_date,
            format_currency(stock.profit_loss),
            trend_marker(Trend::of(stock.profit_loss)),
            if stock.is_sold() { "sold" } else { "active" },
        );
    }
    out
}

pub fn render_stock_detail(stock: &Stock) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", stock.id, stock.name);
    let _ = writeln!(out, "  Quantity     {}", stock.quantity);
    let _ = writeln!(out, "  Buy Price    {}", format_currency(stock.buy_price));
    let _ = writeln!(out, "  Buy Date     {}", format_date(stock.buy_date));
    if let (true, Some(price), Some(date)) = (stock.is_sold(), stock.sell_price, stock.sell_date) {
        let _ = writeln!(out, "  Sell Price   {}", format_currency(price));
        let _ = writeln!(out, "  Sell Date    {}", format_date(date));
    }
    let _ = writeln!(out, "  Total Value  {}", format_currency(stock.current_value()));
    let _ = write!(out, "  P&L          {}", format_currency(stock.profit_loss));
    if stock.is_sold() {
        let pct = stock.profit_loss_percentage();
        let _ = write!(out, " ({}{:.1}%)", if pct > 0.0 { "+" } else { "" }, pct);
    }
    let _ = writeln!(out);
    if stock.is_active() {
        let _ = writeln!(out, "  Active position");
    }
    out
}

/// Header line for the position form.
pub fn render_form_header(mode: &FormMode) -> String {
    match mode {
        FormMode::Create => "Add New Stock".to_string(),
        FormMode::ClosePosition(stock) => format!(
            "Sell Stock: {} ({} shares @ {})",
            stock.name,
            stock.quantity,
            format_currency(stock.buy_price)
        ),
    }
}

pub fn render_empty_state(state: EmptyState) -> String {
    match state {
        EmptyState::NoStocksYet => "No stocks yet\n\
             Start building your portfolio by adding your first stock.\n"
            .to_string(),
        EmptyState::NoMatches => "No stocks found\n\
             Try adjusting your search or filter criteria.\n"
            .to_string(),
    }
}

fn bar(value: f64, max: f64) -> String {
    let len = if max > 0.0 {
        ((value.abs() / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let glyph = if value < 0.0 { '-' } else { '#' };
    std::iter::repeat(glyph).take(len).collect()
}

pub fn render_charts(stocks: &[Stock]) -> String {
    let mut out = String::new();

    let bars = profit_loss_bars(stocks);
    let max = bars.iter().map(|b| b.profit_loss.abs()).fold(0.0, f64::max);
    let _ = writeln!(out, "Profit/Loss by Stock");
    for b in &bars {
        let _ = writeln!(
            out,
            "  {:<11} {:>14} {}",
            b.label,
            format_currency(b.profit_loss),
            bar(b.profit_loss, max)
        );
    }

    let slices = composition(stocks);
    let max = slices.iter().map(|s| s.value).fold(0.0, f64::max);
    let _ = writeln!(out, "\nPortfolio Composition");
    for s in &slices {
        let _ = writeln!(
            out,
            "  {:<13} {:>4.0}% {:>14} {}",
            s.label,
            s.share * 100.0,
            format_currency(s.value),
            bar(s.value, max)
        );
    }
    out
}
