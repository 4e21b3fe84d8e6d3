// src/main.rs
mod api;
mod chart;
mod config;
mod dashboard;
mod error;
mod filter;
mod models;
mod stats;
mod view;

use crate::api::{ApiClient, StockApi};
use crate::config::Config;
use crate::dashboard::{Dashboard, DeleteOutcome, ViewState};
use crate::filter::StatusFilter;
use crate::models::{CreateStockRequest, UpdateStockRequest};
use anyhow::{anyhow, bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use dialoguer::Confirm;
use env_logger::Builder;
use log::{error, info, warn, LevelFilter};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Track stock positions held by the MoneyControl backend")]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = config::API_BASE_URL_ENV_VAR)]
    base_url: Option<String>,

    /// Log requests and state changes
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List positions, optionally filtered
    List(ListArgs),
    /// Show a single position
    Show { id: i64 },
    /// Portfolio totals
    Stats,
    /// Profit/loss and composition charts
    Chart,
    /// Open a new position
    Add(AddArgs),
    /// Close (sell) an existing position
    Sell(SellArgs),
    /// Delete a position permanently
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive substring of the stock name
    #[arg(short, long, default_value = "")]
    search: String,

    #[arg(long, value_enum, default_value_t = StatusFilter::All)]
    status: StatusFilter,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long, value_parser = parse_name)]
    name: String,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    quantity: u32,

    #[arg(long, value_parser = parse_price)]
    buy_price: f64,

    /// YYYY-MM-DD, defaults to today
    #[arg(long, value_parser = parse_date)]
    buy_date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct SellArgs {
    id: i64,

    #[arg(long, value_parser = parse_price)]
    sell_price: f64,

    /// YYYY-MM-DD, defaults to today
    #[arg(long, value_parser = parse_date)]
    sell_date: Option<NaiveDate>,
}

fn parse_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    Ok(name.to_string())
}

fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if !price.is_finite() || price < 0.0 {
        return Err("price must be a non-negative number".to_string());
    }
    Ok(price)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A prompt that cannot be answered (no terminal, closed stdin) counts as "no".
fn confirmed(answer: dialoguer::Result<bool>) -> bool {
    match answer {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Confirmation prompt failed: {}", e);
            false
        }
    }
}

async fn load(dashboard: &mut Dashboard<ApiClient>) -> Result<()> {
    dashboard.load().await;
    match dashboard.state() {
        ViewState::Error(message) => bail!("{}", message),
        _ => Ok(()),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.base_url);
    info!("Using backend at {}", config.base_url);
    let mut dashboard = Dashboard::new(ApiClient::new(&config)?);

    match cli.cmd {
        Command::List(args) => {
            load(&mut dashboard).await?;
            dashboard.set_search(args.search);
            dashboard.set_status_filter(args.status);

            match dashboard.empty_state() {
                Some(empty) => print!("{}", view::render_empty_state(empty)),
                None => {
                    let visible = dashboard.visible_stocks();
                    println!(
                        "{} of {} stocks ({})",
                        visible.len(),
                        dashboard.stocks().len(),
                        dashboard.query().status
                    );
                    print!("{}", view::render_stock_table(&visible));
                }
            }
        }
        Command::Show { id } => {
            let stock = dashboard.api().get_stock(id).await?;
            print!("{}", view::render_stock_detail(&stock));
        }
        Command::Stats => {
            load(&mut dashboard).await?;
            print!("{}", view::render_stats(&dashboard.stats()));
        }
        Command::Chart => {
            load(&mut dashboard).await?;
            if dashboard.stocks().is_empty() {
                println!("No data to display");
            } else {
                print!("{}", view::render_charts(dashboard.stocks()));
            }
        }
        Command::Add(args) => {
            load(&mut dashboard).await?;
            dashboard.open_form();
            if let Some(mode) = dashboard.form_mode() {
                println!("{}", view::render_form_header(&mode));
            }

            let request = CreateStockRequest {
                name: args.name,
                quantity: args.quantity,
                buy_price: args.buy_price,
                buy_date: args.buy_date.unwrap_or_else(today),
            };
            let stock = dashboard.create(&request).await?;
            println!("Added stock #{} {}", stock.id, stock.name);
            print!("{}", view::render_stats(&dashboard.stats()));
        }
        Command::Sell(args) => {
            load(&mut dashboard).await?;
            let target = dashboard
                .stocks()
                .iter()
                .find(|stock| stock.id == args.id)
                .cloned()
                .ok_or_else(|| anyhow!("no stock with id {}", args.id))?;
            if target.is_sold() {
                warn!("Stock {} is already sold; overwriting sell data.", target.id);
            }
            dashboard.select_for_edit(target);
            if let Some(mode) = dashboard.form_mode() {
                println!("{}", view::render_form_header(&mode));
            }

            let request = UpdateStockRequest {
                sell_price: args.sell_price,
                sell_date: args.sell_date.unwrap_or_else(today),
            };
            let stock = dashboard.close_position(&request).await?;
            print!("{}", view::render_stock_detail(&stock));
        }
        Command::Delete { id, yes } => {
            load(&mut dashboard).await?;
            let outcome = dashboard
                .delete(id, || {
                    yes || confirmed(
                        Confirm::new()
                            .with_prompt("Are you sure you want to delete this stock?")
                            .default(false)
                            .interact(),
                    )
                })
                .await;

            match outcome {
                DeleteOutcome::Cancelled => println!("Cancelled."),
                DeleteOutcome::Deleted => println!("Deleted stock #{}.", id),
                DeleteOutcome::Failed => println!("Stock #{} could not be deleted.", id),
            }
        }
    }

    if let ViewState::Error(message) = dashboard.state() {
        warn!("{}", message);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
