// src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single portfolio position as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    pub buy_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
    pub buy_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_date: Option<NaiveDate>,
    /// Computed by the backend. Never recomputed locally.
    pub profit_loss: f64,
}

impl Stock {
    /// A position is sold only when both sell fields are present.
    pub fn is_sold(&self) -> bool {
        self.sell_price.is_some() && self.sell_date.is_some()
    }

    pub fn is_active(&self) -> bool {
        !self.is_sold()
    }

    pub fn invested(&self) -> f64 {
        self.buy_price * f64::from(self.quantity)
    }

    /// Sell price for closed positions, buy price otherwise.
    pub fn current_price(&self) -> f64 {
        match self.sell_price {
            Some(sell_price) if self.is_sold() => sell_price,
            _ => self.buy_price,
        }
    }

    pub fn current_value(&self) -> f64 {
        self.current_price() * f64::from(self.quantity)
    }

    /// Realized return in percent. Zero while the position is open.
    pub fn profit_loss_percentage(&self) -> f64 {
        match self.sell_price {
            Some(sell_price) if self.is_sold() && self.buy_price != 0.0 => {
                (sell_price - self.buy_price) / self.buy_price * 100.0
            }
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockRequest {
    pub name: String,
    pub quantity: u32,
    pub buy_price: f64,
    pub buy_date: NaiveDate,
}

/// Closes a position. The target id travels separately from this payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockRequest {
    pub sell_price: f64,
    pub sell_date: NaiveDate,
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn sold_requires_both_sell_fields() {
        let mut stock = active(1, "Apple", 10, 100.0, 0.0);
        assert!(stock.is_active());

        stock.sell_price = Some(120.0);
        assert!(!stock.is_sold(), "price without date is still active");

        stock.sell_price = None;
        stock.sell_date = Some(date("2023-06-01"));
        assert!(!stock.is_sold(), "date without price is still active");

        stock.sell_price = Some(120.0);
        assert!(stock.is_sold());
        assert!(!stock.is_active());
    }

    #[test]
    fn partial_sell_state_values_at_buy_price() {
        let mut stock = active(1, "Apple", 10, 100.0, 0.0);
        stock.sell_price = Some(120.0);
        assert_eq!(stock.current_value(), 1000.0);
        assert_eq!(stock.profit_loss_percentage(), 0.0);
    }

    #[test]
    fn profit_loss_percentage_for_sold_position() {
        let stock = sold(1, "Apple", 10, 100.0, 120.0, 200.0);
        assert!((stock.profit_loss_percentage() - 20.0).abs() < 1e-9);

        let free = sold(2, "Gift", 1, 0.0, 5.0, 5.0);
        assert_eq!(free.profit_loss_percentage(), 0.0);
    }

    #[test]
    fn stock_deserializes_from_camel_case() {
        let stock: Stock = serde_json::from_value(json!({
            "id": 1,
            "name": "Apple",
            "quantity": 10,
            "buyPrice": 100.0,
            "buyDate": "2023-01-01",
            "profitLoss": 50.0
        }))
        .unwrap();

        assert_eq!(stock, active(1, "Apple", 10, 100.0, 50.0));
    }

    #[test]
    fn stock_accepts_null_sell_fields() {
        let stock: Stock = serde_json::from_value(json!({
            "id": 3,
            "name": "Tesla",
            "quantity": 2,
            "buyPrice": 250.5,
            "sellPrice": null,
            "buyDate": "2023-03-15",
            "sellDate": null,
            "profitLoss": 0
        }))
        .unwrap();

        assert!(stock.is_active());
        assert_eq!(stock.buy_date, date("2023-03-15"));
    }

    #[test]
    fn request_payloads_use_wire_names() {
        let create = CreateStockRequest {
            name: "Apple Inc.".to_string(),
            quantity: 5,
            buy_price: 10.0,
            buy_date: date("2023-01-01"),
        };
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({"name": "Apple Inc.", "quantity": 5, "buyPrice": 10.0, "buyDate": "2023-01-01"})
        );

        let update = UpdateStockRequest {
            sell_price: 120.0,
            sell_date: date("2023-06-01"),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"sellPrice": 120.0, "sellDate": "2023-06-01"})
        );
    }
}
