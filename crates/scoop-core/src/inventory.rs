//! # Inventory State Manager
//!
//! Holds the session's ingredients, recipes and pending order, and applies
//! every mutation the dashboard can trigger.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Dashboard Action         Operation                  State Change       │
//! │  ────────────────         ─────────                  ────────────       │
//! │                                                                         │
//! │  Add Ingredient ────────► add_ingredient() ────────► ingredients.push  │
//! │  Edit Inventory ────────► update_ingredient() ─────► fields replaced   │
//! │  Threshold slider ──────► update_alert_threshold() ► threshold set     │
//! │  Add Recipe ────────────► add_recipe() ────────────► recipes.push      │
//! │  Record Production ─────► record_production() ─────► qty -= line × n   │
//! │  Add to Order ──────────► add_to_order() ──────────► line += qty       │
//! │  Remove ────────────────► remove_from_order() ─────► line dropped      │
//! │  Place Order ───────────► place_order() ───────────► qty = max         │
//! │  (display delay) ───────► finish_order() ──────────► order cleared     │
//! │                                                                         │
//! │  Every failing operation returns an error and changes nothing.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dangling References
//! Recipes and order lines may name ingredients that do not exist. Those
//! lines are skipped when stock is adjusted and show up as "Unknown".

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::{OrderBook, OrderReceipt};
use crate::recipe::RecipeDraft;
use crate::stock::{self, LowStockItem, StockLevel};
use crate::types::{
    Ingredient, IngredientPatch, NewIngredient, OrderItem, ProductionEntry, Recipe, RecipeLine,
};
use crate::validation::{self, non_blank};
use crate::UNKNOWN_INGREDIENT;

// =============================================================================
// Operation Outcomes
// =============================================================================

/// Result of a recorded production run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductionOutcome {
    /// The run itself. Not stored by the inventory.
    pub entry: ProductionEntry,
    pub recipe_name: String,
    /// Names of consumed ingredients now under their threshold.
    pub low_stock: Vec<String>,
}

impl ProductionOutcome {
    /// Whether the "Low Stock Alert" should be raised.
    #[inline]
    pub fn low_stock_alert(&self) -> bool {
        !self.low_stock.is_empty()
    }
}

/// What one recipe line would do to stock, shown before production is
/// confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductionPreviewLine {
    pub ingredient_id: String,
    pub name: String,
    pub unit: String,
    pub total_used: f64,
    /// `None` when the ingredient does not exist.
    pub remaining: Option<f64>,
    pub percent_remaining: Option<f64>,
    pub is_low: bool,
}

// =============================================================================
// Inventory
// =============================================================================

/// The in-memory state of one dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
    order: OrderBook,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory from existing ingredients and recipes.
    pub fn with_data(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> Self {
        Inventory {
            ingredients,
            recipes,
            order: OrderBook::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn order(&self) -> &OrderBook {
        &self.order
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    fn ingredient_mut(&mut self, id: &str) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|i| i.id == id)
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Ingredient name, or "Unknown" for a dangling id.
    pub fn ingredient_name(&self, id: &str) -> &str {
        self.ingredient(id)
            .map(|i| i.name.as_str())
            .unwrap_or(UNKNOWN_INGREDIENT)
    }

    /// Ingredient unit, or an empty string for a dangling id.
    pub fn ingredient_unit(&self, id: &str) -> &str {
        self.ingredient(id).map(|i| i.unit.as_str()).unwrap_or("")
    }

    /// Chart rows for every ingredient.
    pub fn stock_levels(&self) -> Vec<StockLevel> {
        stock::stock_levels(&self.ingredients)
    }

    /// Ingredients under their alert threshold, in inventory order.
    ///
    /// Uses the exact fill level, the same rule as the post-production
    /// alert, so every ingredient that alert names is listed here.
    pub fn low_stock(&self) -> Vec<LowStockItem> {
        self.ingredients
            .iter()
            .filter(|i| i.is_below_threshold())
            .map(|i| LowStockItem::new(i, self.order.contains(&i.id)))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Ingredients
    // -------------------------------------------------------------------------

    /// Validates the form and appends a new ingredient with a fresh id.
    ///
    /// ## Errors
    /// `Validation` when the name or unit is blank, the quantity is negative,
    /// or the max quantity is not positive. Nothing is added in that case.
    pub fn add_ingredient(&mut self, form: NewIngredient) -> CoreResult<&Ingredient> {
        validation::validate_new_ingredient(&form)?;

        let ingredient = Ingredient {
            id: Uuid::new_v4().to_string(),
            name: form.name.trim().to_string(),
            quantity: form.quantity,
            unit: form.unit.trim().to_string(),
            max_quantity: form.max_quantity,
            alert_threshold: form.alert_threshold,
            supplier: non_blank(form.supplier),
            order_url: non_blank(form.order_url),
        };
        debug!(id = %ingredient.id, name = %ingredient.name, "ingredient added");

        self.ingredients.push(ingredient);
        Ok(&self.ingredients[self.ingredients.len() - 1])
    }

    /// Adds an ingredient from inside the recipe form and selects it for the
    /// draft's next line (quantity 1).
    pub fn add_ingredient_to_draft(
        &mut self,
        form: NewIngredient,
        draft: &mut RecipeDraft,
    ) -> CoreResult<&Ingredient> {
        let ingredient = self.add_ingredient(form)?;
        draft.select(ingredient.id.clone(), 1.0);
        Ok(ingredient)
    }

    /// Replaces an ingredient's alert threshold. The value is not range
    /// checked.
    pub fn update_alert_threshold(&mut self, id: &str, percent: f64) -> CoreResult<&Ingredient> {
        let ingredient = self
            .ingredient_mut(id)
            .ok_or_else(|| CoreError::IngredientNotFound(id.to_string()))?;
        ingredient.alert_threshold = Some(percent);
        Ok(ingredient)
    }

    /// Applies a manual edit. Values are taken as given.
    pub fn update_ingredient(&mut self, id: &str, patch: IngredientPatch) -> CoreResult<&Ingredient> {
        let ingredient = self
            .ingredient_mut(id)
            .ok_or_else(|| CoreError::IngredientNotFound(id.to_string()))?;

        if let Some(quantity) = patch.quantity {
            ingredient.quantity = quantity;
        }
        if let Some(max_quantity) = patch.max_quantity {
            ingredient.max_quantity = max_quantity;
        }
        if let Some(threshold) = patch.alert_threshold {
            ingredient.alert_threshold = Some(threshold);
        }
        if patch.supplier.is_some() {
            ingredient.supplier = non_blank(patch.supplier);
        }
        if patch.order_url.is_some() {
            ingredient.order_url = non_blank(patch.order_url);
        }

        Ok(ingredient)
    }

    // -------------------------------------------------------------------------
    // Recipes
    // -------------------------------------------------------------------------

    /// Validates and appends a recipe with a fresh id.
    ///
    /// Line ingredient ids are not checked against the inventory.
    pub fn add_recipe(&mut self, name: &str, lines: Vec<RecipeLine>) -> CoreResult<&Recipe> {
        validation::validate_recipe(name, &lines)?;

        let recipe = Recipe {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            ingredients: lines,
        };
        debug!(id = %recipe.id, name = %recipe.name, lines = recipe.ingredients.len(), "recipe added");

        self.recipes.push(recipe);
        Ok(&self.recipes[self.recipes.len() - 1])
    }

    /// Commits a draft as a recipe and clears the draft.
    ///
    /// On error the draft is left intact.
    pub fn add_recipe_from_draft(&mut self, draft: &mut RecipeDraft) -> CoreResult<&Recipe> {
        validation::validate_recipe(&draft.name, &draft.lines)?;

        let name = std::mem::take(&mut draft.name);
        let lines = std::mem::take(&mut draft.lines);
        draft.clear();
        self.add_recipe(&name, lines)
    }

    // -------------------------------------------------------------------------
    // Production
    // -------------------------------------------------------------------------

    fn production_recipe(&self, recipe_id: &str, tubs: u32) -> CoreResult<&Recipe> {
        validation::validate_name("recipe", recipe_id)?;
        validation::validate_tubs(tubs)?;

        self.recipe(recipe_id)
            .ok_or_else(|| CoreError::RecipeNotFound(recipe_id.to_string()))
    }

    /// Shows the effect of a production run without applying it.
    pub fn preview_production(&self, recipe_id: &str, tubs: u32) -> CoreResult<Vec<ProductionPreviewLine>> {
        let recipe = self.production_recipe(recipe_id, tubs)?;

        let preview = recipe
            .ingredients
            .iter()
            .map(|line| {
                let total_used = line.quantity * f64::from(tubs);
                let ingredient = self.ingredient(&line.ingredient_id);
                let remaining = ingredient.map(|i| i.quantity - total_used);
                let percent_remaining = ingredient
                    .zip(remaining)
                    .map(|(i, left)| stock::percent_full(left, i.max_quantity));
                let is_low = ingredient
                    .zip(percent_remaining)
                    .is_some_and(|(i, pct)| pct < i.threshold());

                ProductionPreviewLine {
                    ingredient_id: line.ingredient_id.clone(),
                    name: self.ingredient_name(&line.ingredient_id).to_string(),
                    unit: self.ingredient_unit(&line.ingredient_id).to_string(),
                    total_used,
                    remaining,
                    percent_remaining,
                    is_low,
                }
            })
            .collect();

        Ok(preview)
    }

    /// Consumes ingredients for `tubs` tubs of a recipe.
    ///
    /// ## Behavior
    /// - Each line subtracts `line.quantity × tubs` from its ingredient
    /// - Stock is not floored at zero
    /// - Lines naming a missing ingredient are skipped
    /// - Touched ingredients whose exact fill level drops under their
    ///   threshold are reported in [`ProductionOutcome::low_stock`]
    ///
    /// ## Errors
    /// - `Validation` for a blank recipe id or zero tubs
    /// - `RecipeNotFound` for an unknown recipe
    pub fn record_production(&mut self, recipe_id: &str, tubs: u32) -> CoreResult<ProductionOutcome> {
        let recipe = self.production_recipe(recipe_id, tubs)?.clone();

        let mut low_stock = Vec::new();
        for line in &recipe.ingredients {
            let Some(ingredient) = self.ingredient_mut(&line.ingredient_id) else {
                debug!(ingredient_id = %line.ingredient_id, "skipping missing ingredient");
                continue;
            };

            ingredient.quantity -= line.quantity * f64::from(tubs);
            if ingredient.quantity < 0.0 {
                warn!(
                    ingredient = %ingredient.name,
                    quantity = ingredient.quantity,
                    "production drove stock below zero"
                );
            }
            if ingredient.is_below_threshold() && !low_stock.contains(&ingredient.name) {
                low_stock.push(ingredient.name.clone());
            }
        }

        Ok(ProductionOutcome {
            entry: ProductionEntry {
                recipe_id: recipe.id,
                tubs,
                date: Utc::now(),
            },
            recipe_name: recipe.name,
            low_stock,
        })
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// Adds to the pending order, growing an existing line for the same
    /// ingredient. Returns the quantity now pending for it.
    pub fn add_to_order(&mut self, ingredient_id: &str, quantity: f64) -> f64 {
        self.order.add(ingredient_id, quantity)
    }

    /// Drops the pending line for an ingredient, if any.
    pub fn remove_from_order(&mut self, ingredient_id: &str) -> Option<OrderItem> {
        self.order.remove(ingredient_id)
    }

    /// Places the pending order.
    ///
    /// Every ordered ingredient is restored to its max quantity, whatever
    /// amount was ordered. The lines stay visible until
    /// [`finish_order`](Self::finish_order) runs with the receipt's ticket.
    pub fn place_order(&mut self, per_line: Money) -> CoreResult<OrderReceipt> {
        let placed_at = Utc::now();
        let ticket = self.order.submit(placed_at)?;
        let estimated_cost = self.order.estimated_cost(per_line);

        let ordered: Vec<String> = self
            .order
            .items()
            .iter()
            .map(|item| item.ingredient_id.clone())
            .collect();

        let mut replenished = Vec::with_capacity(ordered.len());
        for id in &ordered {
            if let Some(ingredient) = self.ingredient_mut(id) {
                ingredient.quantity = ingredient.max_quantity;
                replenished.push(ingredient.name.clone());
            }
        }

        Ok(OrderReceipt {
            ticket,
            replenished,
            placed_at,
            estimated_cost,
        })
    }

    /// Clears the submitted order if `ticket` is still current.
    pub fn finish_order(&mut self, ticket: u64) -> bool {
        self.order.finish(ticket)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;
    use crate::seed::demo_inventory;
    use crate::{ValidationError, DEFAULT_LINE_COST_CENTS};

    fn per_line() -> Money {
        Money::from_cents(DEFAULT_LINE_COST_CENTS)
    }

    fn quantity(inventory: &Inventory, id: &str) -> f64 {
        inventory.ingredient(id).unwrap().quantity
    }

    #[test]
    fn test_add_ingredient() {
        let mut inventory = Inventory::new();
        let form = NewIngredient::new("  Heavy Cream ", 10.0, "Quarts", 40.0)
            .with_supplier("Dairy Farms Inc.")
            .with_order_url("");

        let added = inventory.add_ingredient(form).unwrap().clone();
        assert_eq!(added.name, "Heavy Cream");
        assert_eq!(added.threshold(), 20.0);
        assert_eq!(added.supplier.as_deref(), Some("Dairy Farms Inc."));
        assert_eq!(added.order_url, None);
        assert!(Uuid::parse_str(&added.id).is_ok());
        assert_eq!(inventory.ingredients().len(), 1);
    }

    #[test]
    fn test_add_ingredient_ids_are_unique() {
        let mut inventory = Inventory::new();
        let a = inventory
            .add_ingredient(NewIngredient::new("A", 1.0, "Cups", 2.0))
            .unwrap()
            .id
            .clone();
        let b = inventory
            .add_ingredient(NewIngredient::new("B", 1.0, "Cups", 2.0))
            .unwrap()
            .id
            .clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_ingredient_with_empty_name_is_noop() {
        let mut inventory = demo_inventory();
        let before = inventory.clone();

        let err = inventory
            .add_ingredient(NewIngredient::new("", 1.0, "Cups", 2.0))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_add_ingredient_rejects_bad_amounts() {
        let mut inventory = Inventory::new();
        assert!(inventory
            .add_ingredient(NewIngredient::new("A", -1.0, "Cups", 2.0))
            .is_err());
        assert!(inventory
            .add_ingredient(NewIngredient::new("A", 1.0, "Cups", 0.0))
            .is_err());
        assert!(inventory
            .add_ingredient(NewIngredient::new("A", 1.0, "", 2.0))
            .is_err());
        assert!(inventory.ingredients().is_empty());
    }

    #[test]
    fn test_add_ingredient_to_draft_selects_it() {
        let mut inventory = demo_inventory();
        let mut draft = RecipeDraft::new();

        let id = inventory
            .add_ingredient_to_draft(NewIngredient::new("Mint Leaves", 2.0, "Bunches", 10.0), &mut draft)
            .unwrap()
            .id
            .clone();
        assert_eq!(draft.selection.ingredient_id, id);
        assert_eq!(draft.selection.quantity, 1.0);
    }

    #[test]
    fn test_update_alert_threshold() {
        let mut inventory = demo_inventory();
        inventory.update_alert_threshold("1", 80.0).unwrap();
        assert_eq!(inventory.ingredient("1").unwrap().threshold(), 80.0);
        assert!(inventory.ingredient("1").unwrap().is_low());

        // no bounds check
        inventory.update_alert_threshold("1", 250.0).unwrap();
        assert_eq!(inventory.ingredient("1").unwrap().threshold(), 250.0);

        assert!(matches!(
            inventory.update_alert_threshold("nope", 10.0),
            Err(CoreError::IngredientNotFound(_))
        ));
    }

    #[test]
    fn test_update_ingredient_patch() {
        let mut inventory = demo_inventory();
        let patch = IngredientPatch {
            quantity: Some(-3.0),
            max_quantity: Some(120.0),
            supplier: Some(String::new()),
            ..Default::default()
        };
        let updated = inventory.update_ingredient("1", patch).unwrap();
        assert_eq!(updated.quantity, -3.0);
        assert_eq!(updated.max_quantity, 120.0);
        assert_eq!(updated.supplier, None);
        assert_eq!(updated.order_url.as_deref(), Some("https://example.com/dairy"));
        assert_eq!(updated.threshold(), 20.0);
    }

    #[test]
    fn test_add_recipe() {
        let mut inventory = demo_inventory();
        let recipe = inventory
            .add_recipe("Mint Chip", vec![RecipeLine::new("1", 1.0), RecipeLine::new("4", 1.0)])
            .unwrap()
            .clone();
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(inventory.recipes().len(), 4);
        assert_eq!(inventory.recipe(&recipe.id).unwrap().name, "Mint Chip");
    }

    #[test]
    fn test_add_recipe_validation() {
        let mut inventory = demo_inventory();
        assert!(inventory.add_recipe(" ", vec![RecipeLine::new("1", 1.0)]).is_err());
        assert!(inventory.add_recipe("Plain", vec![]).is_err());
        assert_eq!(inventory.recipes().len(), 3);
    }

    #[test]
    fn test_add_recipe_from_draft() {
        let mut inventory = demo_inventory();
        let mut draft = RecipeDraft::new();
        draft.set_name("Double Vanilla");

        assert!(inventory.add_recipe_from_draft(&mut draft).is_err());
        assert_eq!(draft.name, "Double Vanilla");

        draft.add_line("2", 2.0).unwrap();
        let recipe = inventory.add_recipe_from_draft(&mut draft).unwrap().clone();
        assert_eq!(recipe.name, "Double Vanilla");
        assert_eq!(recipe.ingredients, vec![RecipeLine::new("2", 2.0)]);
        assert_eq!(draft, RecipeDraft::default());
    }

    #[test]
    fn test_dangling_ingredient_lookups() {
        let inventory = demo_inventory();
        assert_eq!(inventory.ingredient_name("1"), "Whole Milk");
        assert_eq!(inventory.ingredient_name("999"), "Unknown");
        assert_eq!(inventory.ingredient_unit("999"), "");
    }

    #[test]
    fn test_record_production_depletes_exactly() {
        let mut inventory = demo_inventory();
        let before = inventory.clone();

        // Chocolate Chip: milk 1, sugar 1.5, chips 2 per tub
        let outcome = inventory.record_production("2", 4).unwrap();
        assert_eq!(outcome.entry.recipe_id, "2");
        assert_eq!(outcome.entry.tubs, 4);
        assert_eq!(outcome.recipe_name, "Chocolate Chip");

        for line in &before.recipe("2").unwrap().ingredients {
            let expected = quantity(&before, &line.ingredient_id) - line.quantity * 4.0;
            assert_eq!(quantity(&inventory, &line.ingredient_id), expected);
        }
        // untouched
        assert_eq!(quantity(&inventory, "2"), 0.0);
        assert_eq!(quantity(&inventory, "5"), 8.0);
    }

    #[test]
    fn test_record_production_can_go_negative() {
        let mut inventory = demo_inventory();
        inventory.record_production("1", 3).unwrap();
        assert_eq!(quantity(&inventory, "2"), -3.0);
    }

    #[test]
    fn test_record_production_low_stock_alert() {
        let mut inventory = demo_inventory();

        // Strawberry x1: puree 8 → 6 of 20 = 30%, sugar 20 → 18.5 of 50 = 37%
        let outcome = inventory.record_production("3", 1).unwrap();
        assert!(!outcome.low_stock_alert());

        // x2 more: puree 6 → 2 of 20 = 10% < 20
        let outcome = inventory.record_production("3", 2).unwrap();
        assert!(outcome.low_stock_alert());
        assert_eq!(outcome.low_stock, vec!["Strawberry Puree".to_string()]);
    }

    #[test]
    fn test_record_production_skips_missing_ingredients() {
        let mut inventory = demo_inventory();
        let id = inventory
            .add_recipe("Ghost", vec![RecipeLine::new("404", 1.0), RecipeLine::new("1", 1.0)])
            .unwrap()
            .id
            .clone();

        let outcome = inventory.record_production(&id, 1).unwrap();
        assert!(!outcome.low_stock_alert());
        assert_eq!(quantity(&inventory, "1"), 75.0);
    }

    #[test]
    fn test_record_production_errors_leave_state() {
        let mut inventory = demo_inventory();
        let before = inventory.clone();

        assert!(matches!(
            inventory.record_production("1", 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            inventory.record_production("", 2),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            inventory.record_production("77", 2),
            Err(CoreError::RecipeNotFound(_))
        ));
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_preview_production() {
        let inventory = demo_inventory();
        let preview = inventory.preview_production("1", 10).unwrap();
        assert_eq!(preview.len(), 3);

        let milk = &preview[0];
        assert_eq!(milk.name, "Whole Milk");
        assert_eq!(milk.total_used, 10.0);
        assert_eq!(milk.remaining, Some(66.0));
        assert_eq!(milk.percent_remaining, Some(66.0));
        assert!(!milk.is_low);

        let sugar = &preview[2];
        assert_eq!(sugar.remaining, Some(0.0));
        assert!(sugar.is_low);

        // preview does not mutate
        assert_eq!(inventory, demo_inventory());
    }

    #[test]
    fn test_add_to_order_twice_accumulates() {
        let mut inventory = demo_inventory();
        assert_eq!(inventory.add_to_order("2", 5.0), 5.0);
        assert_eq!(inventory.add_to_order("2", 3.0), 8.0);

        assert_eq!(inventory.order().len(), 1);
        assert_eq!(inventory.order().items()[0].quantity, 8.0);
    }

    #[test]
    fn test_remove_from_order() {
        let mut inventory = demo_inventory();
        inventory.add_to_order("2", 5.0);
        inventory.add_to_order("5", 12.0);

        assert!(inventory.remove_from_order("2").is_some());
        assert!(inventory.remove_from_order("2").is_none());
        assert_eq!(inventory.order().len(), 1);
    }

    #[test]
    fn test_place_order_replenishes_to_max() {
        let mut inventory = demo_inventory();
        inventory.add_to_order("2", 1.0); // far less than needed
        inventory.add_to_order("5", 12.0);
        inventory.add_to_order("404", 1.0);

        let receipt = inventory.place_order(per_line()).unwrap();
        assert_eq!(quantity(&inventory, "2"), 5.0);
        assert_eq!(quantity(&inventory, "5"), 20.0);
        assert_eq!(quantity(&inventory, "3"), 20.0);
        assert_eq!(
            receipt.replenished,
            vec!["Vanilla Extract".to_string(), "Strawberry Puree".to_string()]
        );
        assert_eq!(receipt.estimated_cost.cents(), 3 * DEFAULT_LINE_COST_CENTS);

        // lines remain until the display delay is over
        assert!(inventory.order().is_submitted());
        assert_eq!(inventory.order().len(), 3);

        assert!(inventory.finish_order(receipt.ticket));
        assert!(inventory.order().is_empty());
        assert_eq!(inventory.order().status(), OrderStatus::Open);
    }

    #[test]
    fn test_place_empty_order_fails() {
        let mut inventory = demo_inventory();
        let before = inventory.clone();
        assert!(matches!(
            inventory.place_order(per_line()),
            Err(CoreError::EmptyOrder)
        ));
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_low_stock_list() {
        let mut inventory = demo_inventory();
        assert_eq!(inventory.low_stock().len(), 1);

        // sugar at 10 of 50 is 20%, under its 25% threshold
        let patch = IngredientPatch {
            quantity: Some(10.0),
            ..Default::default()
        };
        inventory.update_ingredient("3", patch).unwrap();
        inventory.add_to_order("2", 5.0);

        let low = inventory.low_stock();
        let names: Vec<&str> = low.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Vanilla Extract", "Processed Sugar"]);

        assert!(low[0].in_order);
        assert_eq!(low[0].order_amount, 5.0);
        assert!(!low[1].in_order);
        assert_eq!(low[1].order_amount, 40.0);
    }

    #[test]
    fn test_low_stock_list_matches_production_alert_at_boundary() {
        let mut inventory = demo_inventory();
        let patch = IngredientPatch {
            quantity: Some(5.92),
            ..Default::default()
        };
        inventory.update_ingredient("5", patch).unwrap();

        // Strawberry x1: puree 5.92 → 3.92 of 20 = 19.6%, rounds to 20%
        let outcome = inventory.record_production("3", 1).unwrap();
        assert_eq!(outcome.low_stock, vec!["Strawberry Puree".to_string()]);

        let puree = inventory.ingredient("5").unwrap();
        assert!(!puree.is_low());
        assert!(puree.is_below_threshold());

        let low = inventory.low_stock();
        let ids: Vec<&str> = low.iter().map(|i| i.ingredient_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);
        assert_eq!(low[1].percent_full, 20.0);
    }

    #[test]
    fn test_is_low_property_holds_for_every_ingredient() {
        let mut inventory = demo_inventory();
        inventory.record_production("2", 7).unwrap();

        for ingredient in inventory.ingredients() {
            let pct = ((ingredient.quantity / ingredient.max_quantity * 100.0) + 0.5).floor();
            let threshold = ingredient.alert_threshold.unwrap_or(20.0);
            assert_eq!(ingredient.is_low(), pct < threshold, "{}", ingredient.name);
        }

        let rows = inventory.stock_levels();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().zip(inventory.ingredients()).all(|(r, i)| r.below_threshold == i.is_low()));
    }
}
