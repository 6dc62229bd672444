//! # Recipe Commands
//!
//! The "Add Recipe" dialog. The form lives in [`DraftState`] so it survives
//! between events; `commit_draft` turns it into a recipe.
//!
//! ```text
//! set_draft_name ─┐
//! select_line ────┼──► DraftState ──► commit_draft ──► Inventory::recipes
//! add_draft_line ─┤         ▲
//! remove_line ────┘         │
//!          add_draft_ingredient (new ingredient, pre-selected)
//! ```

use tracing::debug;

use crate::commands::ingredient::with_default_threshold;
use crate::commands::Response;
use crate::error::ApiError;
use crate::state::{ConfigState, DraftState, InventoryState};
use scoop_core::{Ingredient, NewIngredient, Notice, Recipe, RecipeDraft, RecipeLine};

fn recipe_added(recipe: Recipe) -> Response<Recipe> {
    let notice = Notice::info(
        "Recipe Added",
        format!("{} has been added to your recipes", recipe.name),
    );
    Response::with_notice(recipe, notice)
}

/// Gets the current recipe form.
pub fn get_draft(draft: &DraftState) -> RecipeDraft {
    debug!("get_draft command");
    draft.with_draft(|d| d.clone())
}

pub fn set_draft_name(draft: &DraftState, name: String) -> RecipeDraft {
    debug!(name = %name, "set_draft_name command");
    draft.with_draft_mut(|d| {
        d.set_name(name);
        d.clone()
    })
}

/// Sets the pending ingredient choice of the recipe form.
pub fn select_draft_line(draft: &DraftState, ingredient_id: String, quantity: f64) -> RecipeDraft {
    debug!(ingredient_id = %ingredient_id, quantity = %quantity, "select_draft_line command");
    draft.with_draft_mut(|d| {
        d.select(ingredient_id, quantity);
        d.clone()
    })
}

/// Appends the pending selection as a recipe line.
///
/// ## Errors
/// `DRAFT_ERROR` when no ingredient is selected or the quantity is not
/// positive.
pub fn add_draft_line(draft: &DraftState) -> Result<RecipeDraft, ApiError> {
    debug!("add_draft_line command");
    let updated = draft.with_draft_mut(|d| {
        d.add_selected_line()?;
        Ok::<RecipeDraft, scoop_core::CoreError>(d.clone())
    })?;
    Ok(updated)
}

pub fn remove_draft_line(draft: &DraftState, index: usize) -> Result<RecipeDraft, ApiError> {
    debug!(index, "remove_draft_line command");
    let updated = draft.with_draft_mut(|d| {
        d.remove_line(index)?;
        Ok::<RecipeDraft, scoop_core::CoreError>(d.clone())
    })?;
    Ok(updated)
}

/// Discards the recipe form.
pub fn clear_draft(draft: &DraftState) -> RecipeDraft {
    debug!("clear_draft command");
    draft.with_draft_mut(|d| {
        d.clear();
        d.clone()
    })
}

/// Creates an ingredient from inside the recipe form and selects it for the
/// next line.
pub fn add_draft_ingredient(
    inventory: &InventoryState,
    draft: &DraftState,
    config: &ConfigState,
    form: NewIngredient,
) -> Result<Response<Ingredient>, ApiError> {
    debug!(name = %form.name, "add_draft_ingredient command");
    let form = with_default_threshold(form, config);

    let ingredient = inventory.with_inventory_mut(|inv| {
        draft.with_draft_mut(|d| inv.add_ingredient_to_draft(form, d).cloned())
    })?;

    let notice = Notice::info(
        "Ingredient Added",
        format!(
            "{} has been added to your inventory and selected for the recipe",
            ingredient.name
        ),
    );
    Ok(Response::with_notice(ingredient, notice))
}

/// Saves the recipe form as a recipe and clears it.
///
/// ## Errors
/// `VALIDATION_ERROR` when the name is blank or there are no lines. The
/// form is kept for correction.
pub fn commit_draft(inventory: &InventoryState, draft: &DraftState) -> Result<Response<Recipe>, ApiError> {
    debug!("commit_draft command");

    let recipe = inventory.with_inventory_mut(|inv| {
        draft.with_draft_mut(|d| inv.add_recipe_from_draft(d).cloned())
    })?;

    Ok(recipe_added(recipe))
}

/// Adds a complete recipe in one call, bypassing the form.
pub fn add_recipe(
    inventory: &InventoryState,
    name: String,
    ingredients: Vec<RecipeLine>,
) -> Result<Response<Recipe>, ApiError> {
    debug!(name = %name, lines = ingredients.len(), "add_recipe command");

    let recipe = inventory.with_inventory_mut(|inv| inv.add_recipe(&name, ingredients).cloned())?;

    Ok(recipe_added(recipe))
}
