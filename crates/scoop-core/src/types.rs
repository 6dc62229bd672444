//! # Domain Types
//!
//! Core domain types used throughout Scoop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Ingredient    │   │     Recipe      │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  lines[]        │   │  ingredient_id  │       │
//! │  │  quantity       │   │   ingredient_id │   │  quantity       │       │
//! │  │  max_quantity   │   │   quantity/tub  │   └─────────────────┘       │
//! │  │  alert_threshold│   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! │                        ┌─────────────────┐                              │
//! │                        │ ProductionEntry │  (ephemeral, never stored)   │
//! │                        │  recipe_id      │                              │
//! │                        │  tubs, date     │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities are `f64`: recipes call for fractional amounts such as
//! 1.5 cups of sugar per tub.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::stock;
use crate::DEFAULT_ALERT_THRESHOLD;

// =============================================================================
// Ingredient
// =============================================================================

/// A stocked ingredient.
///
/// ## Invariants
/// - `quantity` is conceptually within `[0, max_quantity]`. Manual edits and
///   production runs are allowed to leave that range (stock can go negative).
/// - `max_quantity` is positive when created through
///   [`Inventory::add_ingredient`](crate::Inventory::add_ingredient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Ingredient {
    /// Unique identifier.
    pub id: String,

    /// Display name ("Whole Milk").
    pub name: String,

    /// Current stock in `unit`s.
    pub quantity: f64,

    /// Unit label ("Gallons", "Cups").
    pub unit: String,

    /// Storage capacity; a full replenishment restores `quantity` to this.
    pub max_quantity: f64,

    /// Percentage of `max_quantity` below which the ingredient is low.
    /// `None` means the default of 20%.
    pub alert_threshold: Option<f64>,

    /// Supplier name shown in the order widget.
    pub supplier: Option<String>,

    /// Supplier ordering page.
    pub order_url: Option<String>,
}

impl Ingredient {
    /// Effective alert threshold in percent.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.alert_threshold.unwrap_or(DEFAULT_ALERT_THRESHOLD)
    }

    /// Stock level as a whole percentage of capacity (rounded half up).
    #[inline]
    pub fn percent_full(&self) -> f64 {
        stock::percent_full(self.quantity, self.max_quantity)
    }

    /// Whether the rounded stock level is under the alert threshold.
    ///
    /// This is the classification every dashboard surface uses.
    #[inline]
    pub fn is_low(&self) -> bool {
        self.percent_full() < self.threshold()
    }

    /// Whether the unrounded stock level is under the alert threshold.
    ///
    /// Used right after a production run to decide on the "Low Stock Alert".
    #[inline]
    pub fn is_below_threshold(&self) -> bool {
        stock::exact_percent(self.quantity, self.max_quantity) < self.threshold()
    }

    /// Amount needed to fill the ingredient back to capacity, rounded up.
    #[inline]
    pub fn reorder_amount(&self) -> f64 {
        (self.max_quantity - self.quantity).ceil()
    }
}

// =============================================================================
// New Ingredient (form input)
// =============================================================================

/// Fields of the "Add Ingredient" form.
///
/// ## Example
/// ```rust
/// use scoop_core::NewIngredient;
///
/// let form = NewIngredient::new("Heavy Cream", 10.0, "Quarts", 40.0)
///     .with_threshold(25.0)
///     .with_supplier("Dairy Farms Inc.");
/// assert_eq!(form.alert_threshold, Some(25.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub max_quantity: f64,
    #[serde(default)]
    pub alert_threshold: Option<f64>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub order_url: Option<String>,
}

impl NewIngredient {
    /// Creates form input with the default 20% alert threshold.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        max_quantity: f64,
    ) -> Self {
        NewIngredient {
            name: name.into(),
            quantity,
            unit: unit.into(),
            max_quantity,
            alert_threshold: Some(DEFAULT_ALERT_THRESHOLD),
            supplier: None,
            order_url: None,
        }
    }

    pub fn with_threshold(mut self, percent: f64) -> Self {
        self.alert_threshold = Some(percent);
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn with_order_url(mut self, url: impl Into<String>) -> Self {
        self.order_url = Some(url.into());
        self
    }
}

impl Default for NewIngredient {
    /// The blank form: empty fields, zero amounts, 20% threshold.
    fn default() -> Self {
        NewIngredient::new("", 0.0, "", 0.0)
    }
}

// =============================================================================
// Ingredient Patch (inventory editor)
// =============================================================================

/// In-place edits from the "Edit Inventory" dialog.
///
/// `None` leaves a field untouched. Values are applied as typed, without
/// validation. An empty `supplier` or `order_url` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IngredientPatch {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub max_quantity: Option<f64>,
    #[serde(default)]
    pub alert_threshold: Option<f64>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub order_url: Option<String>,
}

impl IngredientPatch {
    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.max_quantity.is_none()
            && self.alert_threshold.is_none()
            && self.supplier.is_none()
            && self.order_url.is_none()
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// One ingredient requirement of a recipe, per tub produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecipeLine {
    /// Referenced ingredient. Not checked for existence.
    pub ingredient_id: String,
    /// Amount consumed per tub, in the ingredient's unit.
    pub quantity: f64,
}

impl RecipeLine {
    pub fn new(ingredient_id: impl Into<String>, quantity: f64) -> Self {
        RecipeLine {
            ingredient_id: ingredient_id.into(),
            quantity,
        }
    }
}

/// A named recipe: an ordered list of per-tub ingredient requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<RecipeLine>,
}

// =============================================================================
// Order Item
// =============================================================================

/// A pending reorder line. At most one per ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderItem {
    pub ingredient_id: String,
    pub quantity: f64,
}

// =============================================================================
// Production Entry
// =============================================================================

/// A record of one production run.
///
/// Built when production is recorded and handed back to the caller; the
/// inventory does not keep a production history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductionEntry {
    pub recipe_id: String,
    pub tubs: u32,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn milk(quantity: f64) -> Ingredient {
        Ingredient {
            id: "1".to_string(),
            name: "Whole Milk".to_string(),
            quantity,
            unit: "Gallons".to_string(),
            max_quantity: 100.0,
            alert_threshold: None,
            supplier: None,
            order_url: None,
        }
    }

    #[test]
    fn test_threshold_defaults_to_twenty() {
        let ingredient = milk(50.0);
        assert_eq!(ingredient.threshold(), 20.0);

        let ingredient = Ingredient {
            alert_threshold: Some(35.0),
            ..milk(50.0)
        };
        assert_eq!(ingredient.threshold(), 35.0);
    }

    #[test]
    fn test_zero_threshold_is_respected() {
        let ingredient = Ingredient {
            alert_threshold: Some(0.0),
            ..milk(0.0)
        };
        assert_eq!(ingredient.threshold(), 0.0);
        assert!(!ingredient.is_low());
    }

    #[test]
    fn test_is_low_uses_rounded_percent() {
        // 19.6% rounds to 20%, which is not below 20
        let ingredient = milk(19.6);
        assert!(!ingredient.is_low());
        assert!(ingredient.is_below_threshold());

        let ingredient = milk(19.4);
        assert!(ingredient.is_low());
    }

    #[test]
    fn test_reorder_amount_rounds_up() {
        assert_eq!(milk(76.0).reorder_amount(), 24.0);
        assert_eq!(milk(97.5).reorder_amount(), 3.0);
        assert_eq!(milk(-4.0).reorder_amount(), 104.0);
    }

    #[test]
    fn test_new_ingredient_builder() {
        let form = NewIngredient::new("Cream", 1.0, "Quarts", 4.0)
            .with_threshold(10.0)
            .with_supplier("Dairy")
            .with_order_url("https://example.com/dairy");
        assert_eq!(form.alert_threshold, Some(10.0));
        assert_eq!(form.supplier.as_deref(), Some("Dairy"));
        assert_eq!(form.order_url.as_deref(), Some("https://example.com/dairy"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(IngredientPatch::default().is_empty());
        let patch = IngredientPatch {
            quantity: Some(3.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_ingredient_serializes_camel_case() {
        let json = serde_json::to_value(milk(5.0)).unwrap();
        assert_eq!(json["maxQuantity"], 100.0);
        assert!(json["alertThreshold"].is_null());
    }
}
