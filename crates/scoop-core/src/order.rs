//! # Order Book
//!
//! The pending reorder set and its submission lifecycle.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   add / remove   ┌──────────┐                             │
//! │  │   Open   │◄────────────────►│   Open   │                             │
//! │  │  (empty) │                  │ (lines)  │                             │
//! │  └──────────┘                  └────┬─────┘                             │
//! │       ▲                             │ submit → ticket N                 │
//! │       │                             ▼                                   │
//! │       │  finish(N)            ┌───────────────┐                         │
//! │       └───────────────────────│  Submitted N  │  "Inventory replenished"│
//! │                               └───────────────┘                         │
//! │                                                                         │
//! │  finish(M) with M != N is ignored: a timer from an earlier              │
//! │  submission never clears a newer one.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::OrderItem;

/// Where the order widget currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    /// Collecting lines.
    #[default]
    Open,
    /// Placed; lines are kept on screen until the reset for `ticket` runs.
    Submitted {
        ticket: u64,
        #[serde(rename = "placedAt")]
        #[ts(as = "String")]
        placed_at: DateTime<Utc>,
    },
}

/// Confirmation returned by a successful order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderReceipt {
    /// Pass back to [`OrderBook::finish`] once the display delay is over.
    pub ticket: u64,
    /// Names of the ingredients restored to full capacity.
    pub replenished: Vec<String>,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    pub estimated_cost: Money,
}

/// Pending order lines, unique per ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    items: Vec<OrderItem>,
    status: OrderStatus,
    last_ticket: u64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending lines in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, OrderStatus::Submitted { .. })
    }

    /// Whether a line exists for this ingredient.
    pub fn contains(&self, ingredient_id: &str) -> bool {
        self.items.iter().any(|i| i.ingredient_id == ingredient_id)
    }

    /// Adds a line or grows the existing one for the same ingredient.
    ///
    /// Returns the quantity now pending for that ingredient.
    pub fn add(&mut self, ingredient_id: &str, quantity: f64) -> f64 {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.ingredient_id == ingredient_id)
        {
            item.quantity += quantity;
            return item.quantity;
        }

        self.items.push(OrderItem {
            ingredient_id: ingredient_id.to_string(),
            quantity,
        });
        quantity
    }

    /// Removes the line for an ingredient, if any.
    pub fn remove(&mut self, ingredient_id: &str) -> Option<OrderItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.ingredient_id == ingredient_id)?;
        Some(self.items.remove(index))
    }

    /// Marks the order as placed and hands out a fresh ticket.
    ///
    /// Lines stay in place until [`finish`](Self::finish) is called with the
    /// returned ticket.
    pub fn submit(&mut self, now: DateTime<Utc>) -> CoreResult<u64> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        self.last_ticket += 1;
        self.status = OrderStatus::Submitted {
            ticket: self.last_ticket,
            placed_at: now,
        };
        Ok(self.last_ticket)
    }

    /// Clears the order if `ticket` is the latest submission.
    ///
    /// Returns whether anything was cleared.
    pub fn finish(&mut self, ticket: u64) -> bool {
        match self.status {
            OrderStatus::Submitted { ticket: current, .. } if current == ticket => {
                self.items.clear();
                self.status = OrderStatus::Open;
                true
            }
            _ => false,
        }
    }

    /// Placeholder estimate: a flat price per line.
    pub fn estimated_cost(&self, per_line: Money) -> Money {
        per_line * self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_per_ingredient() {
        let mut book = OrderBook::new();
        assert_eq!(book.add("2", 5.0), 5.0);
        assert_eq!(book.add("3", 30.0), 30.0);
        assert_eq!(book.add("2", 2.5), 7.5);

        assert_eq!(book.len(), 2);
        assert_eq!(book.items()[0].quantity, 7.5);
    }

    #[test]
    fn test_remove() {
        let mut book = OrderBook::new();
        book.add("2", 5.0);

        assert!(book.remove("9").is_none());
        let removed = book.remove("2").unwrap();
        assert_eq!(removed.quantity, 5.0);
        assert!(book.is_empty());
    }

    #[test]
    fn test_submit_empty_order_fails() {
        let mut book = OrderBook::new();
        assert!(matches!(book.submit(Utc::now()), Err(CoreError::EmptyOrder)));
        assert_eq!(book.status(), OrderStatus::Open);
    }

    #[test]
    fn test_finish_requires_current_ticket() {
        let mut book = OrderBook::new();
        book.add("2", 5.0);
        let first = book.submit(Utc::now()).unwrap();
        let second = book.submit(Utc::now()).unwrap();
        assert_ne!(first, second);

        assert!(!book.finish(first));
        assert_eq!(book.len(), 1);
        assert!(book.is_submitted());

        assert!(book.finish(second));
        assert!(book.is_empty());
        assert_eq!(book.status(), OrderStatus::Open);

        assert!(!book.finish(second));
    }

    #[test]
    fn test_estimated_cost() {
        let mut book = OrderBook::new();
        let per_line = Money::from_cents(2599);
        assert!(book.estimated_cost(per_line).is_zero());

        book.add("1", 1.0);
        book.add("2", 1.0);
        book.add("1", 1.0);
        assert_eq!(book.estimated_cost(per_line).cents(), 5198);
    }
}
