// src/dashboard.rs
//! Session state for the portfolio dashboard.
//!
//! The controller owns the only copy of the stock list. Every mutation goes
//! through the backend and is followed by a full reload; the list is always
//! replaced wholesale and never patched locally.

use crate::api::StockApi;
use crate::error::{ApiError, DashboardError};
use crate::filter::{StatusFilter, StockQuery};
use crate::models::{CreateStockRequest, Stock, UpdateStockRequest};
use crate::stats::PortfolioStats;
use log::{debug, error, info};

pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load stocks. Please check if the backend is running.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    ClosePosition(Stock),
}

/// Identifies one load request. Only the most recently issued ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoStocksYet,
    NoMatches,
}

pub struct Dashboard<C> {
    api: C,
    stocks: Vec<Stock>,
    state: ViewState,
    query: StockQuery,
    form_open: bool,
    editing: Option<Stock>,
    generation: u64,
}

impl<C: StockApi> Dashboard<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            stocks: Vec::new(),
            state: ViewState::Loading,
            query: StockQuery::default(),
            form_open: false,
            editing: None,
            generation: 0,
        }
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats::from_stocks(&self.stocks)
    }

    pub fn query(&self) -> &StockQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    pub fn visible_stocks(&self) -> Vec<&Stock> {
        self.query.apply(&self.stocks)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible_stocks().is_empty() {
            None
        } else if self.query.is_unconstrained() {
            Some(EmptyState::NoStocksYet)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a list result. Returns false when a newer load has been issued since.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Stock>, ApiError>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                "Discarding stale load {} (latest is {})",
                ticket.0, self.generation
            );
            return false;
        }

        match result {
            Ok(stocks) => {
                info!("Loaded {} stocks.", stocks.len());
                self.stocks = stocks;
                self.state = ViewState::Ready;
            }
            Err(e) => {
                error!("Error loading stocks: {}", e);
                self.state = ViewState::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.api.list_stocks().await;
        self.finish_load(ticket, result);
    }

    pub fn form_mode(&self) -> Option<FormMode> {
        if !self.form_open {
            return None;
        }
        Some(match &self.editing {
            Some(stock) => FormMode::ClosePosition(stock.clone()),
            None => FormMode::Create,
        })
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn select_for_edit(&mut self, stock: Stock) {
        self.editing = Some(stock);
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.editing = None;
    }

    pub async fn create(&mut self, request: &CreateStockRequest) -> Result<Stock, DashboardError> {
        match self.api.create_stock(request).await {
            Ok(stock) => {
                info!("Stock {} created with id {}.", stock.name, stock.id);
                self.close_form();
                self.load().await;
                Ok(stock)
            }
            Err(e) => {
                error!("Error creating stock: {}", e);
                Err(e.into())
            }
        }
    }

    /// Sells the stock currently selected for editing.
    pub async fn close_position(
        &mut self,
        request: &UpdateStockRequest,
    ) -> Result<Stock, DashboardError> {
        let id = self
            .editing
            .as_ref()
            .map(|stock| stock.id)
            .ok_or(DashboardError::NoEditTarget)?;

        match self.api.update_stock(id, request).await {
            Ok(stock) => {
                info!("Stock {} closed at {}.", stock.id, request.sell_price);
                self.close_form();
                self.load().await;
                Ok(stock)
            }
            Err(e) => {
                error!("Error updating stock: {}", e);
                Err(e.into())
            }
        }
    }

    /// Best-effort: a failed delete is logged and leaves the list as it was.
    pub async fn delete(&mut self, id: i64, confirm: impl FnOnce() -> bool) -> DeleteOutcome {
        if !confirm() {
            debug!("Delete of stock {} cancelled.", id);
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_stock(id).await {
            Ok(()) => {
                info!("Stock {} deleted.", id);
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Error deleting stock: {}", e);
                DeleteOutcome::Failed
            }
        }
    }
}
