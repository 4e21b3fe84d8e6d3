// src/api.rs
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{CreateStockRequest, Stock, UpdateStockRequest};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// CRUD operations against the portfolio backend.
///
/// Every call is attempted once. No retries, no client-side timeout.
#[async_trait]
pub trait StockApi: Send + Sync {
    async fn list_stocks(&self) -> Result<Vec<Stock>, ApiError>;
    async fn get_stock(&self, id: i64) -> Result<Stock, ApiError>;
    async fn create_stock(&self, request: &CreateStockRequest) -> Result<Stock, ApiError>;
    async fn update_stock(&self, id: i64, request: &UpdateStockRequest)
        -> Result<Stock, ApiError>;
    async fn delete_stock(&self, id: i64) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends the request and returns the raw body, or `None` for 204 and blank bodies.
    async fn execute(&self, request: RequestBuilder) -> Result<Option<Vec<u8>>, ApiError> {
        let response = request.send().await.map_err(|e| {
            error!("API request failed: {}", e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        debug!("{} responded with {}", response.url(), status);
        if !status.is_success() {
            error!("API request failed: HTTP {}", status);
            return Err(ApiError::Status(status));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.bytes().await.map_err(ApiError::Transport)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            Ok(None)
        } else {
            Ok(Some(body.to_vec()))
        }
    }
}

fn parse<T: DeserializeOwned>(body: Option<Vec<u8>>) -> Result<T, ApiError> {
    let body = body.ok_or(ApiError::EmptyBody)?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl StockApi for ApiClient {
    async fn list_stocks(&self) -> Result<Vec<Stock>, ApiError> {
        let body = self.execute(self.client.get(self.url("/stocks"))).await?;
        match body {
            Some(_) => parse(body),
            None => Ok(Vec::new()),
        }
    }

    async fn get_stock(&self, id: i64) -> Result<Stock, ApiError> {
        let url = self.url(&format!("/stocks/{}", id));
        parse(self.execute(self.client.get(url)).await?)
    }

    async fn create_stock(&self, request: &CreateStockRequest) -> Result<Stock, ApiError> {
        let builder = self.client.post(self.url("/stocks")).json(request);
        parse(self.execute(builder).await?)
    }

    async fn update_stock(
        &self,
        id: i64,
        request: &UpdateStockRequest,
    ) -> Result<Stock, ApiError> {
        let url = self.url(&format!("/stocks/{}", id));
        parse(self.execute(self.client.put(url).json(request)).await?)
    }

    async fn delete_stock(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/stocks/{}", id));
        self.execute(self.client.delete(url)).await?;
        Ok(())
    }
}
