//! # Demo Kitchen
//!
//! The starting inventory shown when the dashboard opens with demo data.
//!
//! | id | Ingredient       | Stock     | Alert |
//! |----|------------------|-----------|-------|
//! | 1  | Whole Milk       | 76 / 100  | 20%   |
//! | 2  | Vanilla Extract  | 0 / 5     | 30%   |
//! | 3  | Processed Sugar  | 20 / 50   | 25%   |
//! | 4  | Chocolate Chips  | 15 / 30   | 15%   |
//! | 5  | Strawberry Puree | 8 / 20    | 20%   |

use crate::inventory::Inventory;
use crate::types::{Ingredient, Recipe, RecipeLine};

#[allow(clippy::too_many_arguments)]
fn ingredient(
    id: &str,
    name: &str,
    quantity: f64,
    unit: &str,
    max_quantity: f64,
    alert_threshold: f64,
    supplier: &str,
    order_url: &str,
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        max_quantity,
        alert_threshold: Some(alert_threshold),
        supplier: Some(supplier.to_string()),
        order_url: Some(order_url.to_string()),
    }
}

fn recipe(id: &str, name: &str, lines: &[(&str, f64)]) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        ingredients: lines
            .iter()
            .map(|(ingredient_id, quantity)| RecipeLine::new(*ingredient_id, *quantity))
            .collect(),
    }
}

/// The five demo ingredients.
pub fn demo_ingredients() -> Vec<Ingredient> {
    vec![
        ingredient("1", "Whole Milk", 76.0, "Gallons", 100.0, 20.0, "Dairy Farms Inc.", "https://example.com/dairy"),
        ingredient("2", "Vanilla Extract", 0.0, "Cups", 5.0, 30.0, "Flavor Essentials", "https://example.com/flavors"),
        ingredient("3", "Processed Sugar", 20.0, "Cups", 50.0, 25.0, "Sweet Supplies Co.", "https://example.com/sugar"),
        ingredient("4", "Chocolate Chips", 15.0, "Pounds", 30.0, 15.0, "Cocoa Traders", "https://example.com/chocolate"),
        ingredient("5", "Strawberry Puree", 8.0, "Quarts", 20.0, 20.0, "Fresh Fruit Distributors", "https://example.com/fruit"),
    ]
}

/// The three demo recipes, quantities per tub.
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        recipe("1", "Vanilla Ice Cream", &[("1", 1.0), ("2", 1.0), ("3", 2.0)]),
        recipe("2", "Chocolate Chip", &[("1", 1.0), ("3", 1.5), ("4", 2.0)]),
        recipe("3", "Strawberry", &[("1", 1.0), ("3", 1.5), ("5", 2.0)]),
    ]
}

/// A fresh inventory holding the demo ingredients and recipes.
pub fn demo_inventory() -> Inventory {
    Inventory::with_data(demo_ingredients(), demo_recipes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_recipes_reference_demo_ingredients() {
        let inventory = demo_inventory();
        for recipe in inventory.recipes() {
            for line in &recipe.ingredients {
                assert!(
                    inventory.ingredient(&line.ingredient_id).is_some(),
                    "{} references {}",
                    recipe.name,
                    line.ingredient_id
                );
            }
        }
    }

    #[test]
    fn test_demo_starts_with_empty_vanilla() {
        let inventory = demo_inventory();
        let vanilla = inventory.ingredient("2").unwrap();
        assert_eq!(vanilla.quantity, 0.0);
        assert!(vanilla.is_low());
        assert!(inventory.order().is_empty());
    }
}
