//! # Stock Levels
//!
//! Percentage math and low-stock classification.
//!
//! Nothing here is cached: every view recomputes from the current
//! quantities, so a manual edit is reflected immediately.
//!
//! ## Classification
//! ```text
//! percent_full = round(quantity / max_quantity × 100)     (half up)
//! is_low       = percent_full < (alert_threshold ?? 20)      badges, chart
//! below        = exact_percent < (alert_threshold ?? 20)     reorder list, alert
//! ```
//!
//! A capacity of zero (only reachable through manual edits) yields an
//! infinite or NaN percentage, which never classifies as low.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Ingredient;

/// Unrounded fill level in percent.
#[inline]
pub fn exact_percent(quantity: f64, max_quantity: f64) -> f64 {
    quantity / max_quantity * 100.0
}

/// Fill level rounded to a whole percent, halves rounding up.
///
/// `f64::round` rounds halves away from zero, which disagrees for negative
/// stock (-2.5% must become -2%), hence the explicit floor.
#[inline]
pub fn percent_full(quantity: f64, max_quantity: f64) -> f64 {
    (exact_percent(quantity, max_quantity) + 0.5).floor()
}

// =============================================================================
// Stock Level Row
// =============================================================================

/// One row of the inventory chart / badge strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StockLevel {
    pub id: String,
    pub name: String,
    /// Rounded percent of capacity.
    pub stock: f64,
    pub quantity: f64,
    pub unit: String,
    pub max: f64,
    pub threshold: f64,
    pub below_threshold: bool,
}

impl From<&Ingredient> for StockLevel {
    fn from(ingredient: &Ingredient) -> Self {
        StockLevel {
            id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            stock: ingredient.percent_full(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            max: ingredient.max_quantity,
            threshold: ingredient.threshold(),
            below_threshold: ingredient.is_low(),
        }
    }
}

// =============================================================================
// Low Stock Item
// =============================================================================

/// An entry of the "Order Ingredients" widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LowStockItem {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: f64,
    pub max_quantity: f64,
    pub unit: String,
    pub percent_full: f64,
    pub threshold: f64,
    /// Suggested amount to order: capacity minus stock, rounded up.
    pub order_amount: f64,
    pub supplier: Option<String>,
    pub order_url: Option<String>,
    /// Whether a pending order line already covers this ingredient.
    pub in_order: bool,
}

impl LowStockItem {
    pub fn new(ingredient: &Ingredient, in_order: bool) -> Self {
        LowStockItem {
            ingredient_id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            max_quantity: ingredient.max_quantity,
            unit: ingredient.unit.clone(),
            percent_full: ingredient.percent_full(),
            threshold: ingredient.threshold(),
            order_amount: ingredient.reorder_amount(),
            supplier: ingredient.supplier.clone(),
            order_url: ingredient.order_url.clone(),
            in_order,
        }
    }
}

/// Stock rows for every ingredient, in inventory order.
pub fn stock_levels(ingredients: &[Ingredient]) -> Vec<StockLevel> {
    ingredients.iter().map(StockLevel::from).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
