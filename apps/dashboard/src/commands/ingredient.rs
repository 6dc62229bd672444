//! # Ingredient Commands
//!
//! The dashboard snapshot and everything on the inventory widget: adding
//! ingredients, manual edits and per-ingredient alert thresholds.

use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::order::OrderView;
use crate::commands::Response;
use crate::error::ApiError;
use crate::state::{ConfigState, InventoryState};
use scoop_core::{
    Ingredient, IngredientPatch, LowStockItem, NewIngredient, Notice, Recipe, StockLevel,
};

/// Everything the dashboard renders, in one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub store_name: String,
    pub ingredients: Vec<Ingredient>,
    /// Chart rows for the stock level widget
    pub stock_levels: Vec<StockLevel>,
    /// Rows for the reorder widget
    pub low_stock: Vec<LowStockItem>,
    pub recipes: Vec<Recipe>,
    pub order: OrderView,
}

/// Gets the full dashboard state.
pub fn get_dashboard(inventory: &InventoryState, config: &ConfigState) -> DashboardSnapshot {
    debug!("get_dashboard command");

    inventory.with_inventory(|inv| DashboardSnapshot {
        store_name: config.store_name.clone(),
        ingredients: inv.ingredients().to_vec(),
        stock_levels: inv.stock_levels(),
        low_stock: inv.low_stock(),
        recipes: inv.recipes().to_vec(),
        order: OrderView::build(inv, config),
    })
}

/// Fills a missing threshold with the configured default.
pub(crate) fn with_default_threshold(mut form: NewIngredient, config: &ConfigState) -> NewIngredient {
    if form.alert_threshold.is_none() {
        form.alert_threshold = Some(config.default_alert_threshold);
    }
    form
}

/// Adds an ingredient to the inventory.
///
/// ## Validation
/// - Name and unit must not be blank
/// - Quantity must not be negative
/// - Max quantity must be positive
///
/// ## Returns
/// The stored ingredient, with its generated id
pub fn add_ingredient(
    inventory: &InventoryState,
    config: &ConfigState,
    form: NewIngredient,
) -> Result<Response<Ingredient>, ApiError> {
    debug!(name = %form.name, "add_ingredient command");
    let form = with_default_threshold(form, config);

    let ingredient = inventory.with_inventory_mut(|inv| inv.add_ingredient(form).cloned())?;

    let notice = Notice::info(
        "Ingredient Added",
        format!("{} has been added to your inventory", ingredient.name),
    );
    Ok(Response::with_notice(ingredient, notice))
}

/// Sets an ingredient's alert threshold (percent of max quantity).
pub fn update_alert_threshold(
    inventory: &InventoryState,
    ingredient_id: String,
    threshold: f64,
) -> Result<Response<Ingredient>, ApiError> {
    debug!(ingredient_id = %ingredient_id, threshold = %threshold, "update_alert_threshold command");

    let ingredient = inventory.with_inventory_mut(|inv| {
        inv.update_alert_threshold(&ingredient_id, threshold).cloned()
    })?;

    let notice = Notice::info(
        "Alert Threshold Updated",
        format!("{} alert threshold set to {}%", ingredient.name, threshold),
    );
    Ok(Response::with_notice(ingredient, notice))
}

/// Applies a manual edit from the inventory editor.
pub fn update_ingredient(
    inventory: &InventoryState,
    ingredient_id: String,
    patch: IngredientPatch,
) -> Result<Response<Ingredient>, ApiError> {
    debug!(ingredient_id = %ingredient_id, "update_ingredient command");

    if patch.is_empty() {
        return Err(ApiError::validation("Nothing to update"));
    }

    let ingredient = inventory.with_inventory_mut(|inv| {
        inv.update_ingredient(&ingredient_id, patch).cloned()
    })?;

    if ingredient.quantity < 0.0 || ingredient.max_quantity <= 0.0 {
        warn!(
            ingredient = %ingredient.name,
            quantity = ingredient.quantity,
            max_quantity = ingredient.max_quantity,
            "ingredient edited to an out of range level"
        );
    }

    let notice = Notice::info(
        "Inventory Updated",
        format!("{} has been updated", ingredient.name),
    );
    Ok(Response::with_notice(ingredient, notice))
}
