//! # Recipe Drafts
//!
//! The "Add Recipe" form, built up one ingredient line at a time.
//!
//! ```text
//! select(ingredient, qty) ──► add_selected_line() ──► lines[]
//!                                                        │
//!                      remove_line(i) ◄──────────────────┤
//!                                                        ▼
//!                                  Inventory::add_recipe_from_draft
//! ```
//!
//! After every accepted line the selection resets to "nothing chosen,
//! quantity 1", mirroring the form.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::RecipeLine;

/// The ingredient/quantity pair currently chosen in the line picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineSelection {
    /// Empty string means nothing is selected.
    pub ingredient_id: String,
    pub quantity: f64,
}

impl Default for LineSelection {
    fn default() -> Self {
        LineSelection {
            ingredient_id: String::new(),
            quantity: 1.0,
        }
    }
}

/// A recipe under construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecipeDraft {
    pub name: String,
    pub lines: Vec<RecipeLine>,
    pub selection: LineSelection,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Chooses the ingredient and amount for the next line.
    pub fn select(&mut self, ingredient_id: impl Into<String>, quantity: f64) {
        self.selection = LineSelection {
            ingredient_id: ingredient_id.into(),
            quantity,
        };
    }

    /// Appends the current selection as a line.
    ///
    /// ## Errors
    /// `NothingSelected` when no ingredient is chosen or the quantity is not
    /// positive. The selection is kept so the user can correct it.
    pub fn add_selected_line(&mut self) -> CoreResult<&RecipeLine> {
        let selection = &self.selection;
        if selection.ingredient_id.is_empty()
            || selection.quantity.is_nan()
            || selection.quantity <= 0.0
        {
            return Err(CoreError::NothingSelected);
        }

        let line = RecipeLine::new(selection.ingredient_id.clone(), selection.quantity);
        self.selection = LineSelection::default();
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Selects and appends in one step.
    pub fn add_line(&mut self, ingredient_id: impl Into<String>, quantity: f64) -> CoreResult<&RecipeLine> {
        self.select(ingredient_id, quantity);
        self.add_selected_line()
    }

    /// Drops the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> CoreResult<RecipeLine> {
        if index >= self.lines.len() {
            return Err(CoreError::LineOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Resets the form to blank.
    pub fn clear(&mut self) {
        *self = RecipeDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_line_resets_selection() {
        let mut draft = RecipeDraft::new();
        draft.select("3", 1.5);
        let line = draft.add_selected_line().unwrap();
        assert_eq!(line.ingredient_id, "3");
        assert_eq!(line.quantity, 1.5);

        assert_eq!(draft.selection, LineSelection::default());
        assert_eq!(draft.lines.len(), 1);
    }

    #[test]
    fn test_add_line_requires_selection() {
        let mut draft = RecipeDraft::new();
        assert!(matches!(draft.add_selected_line(), Err(CoreError::NothingSelected)));

        assert!(matches!(draft.add_line("1", 0.0), Err(CoreError::NothingSelected)));
        assert!(matches!(draft.add_line("1", f64::NAN), Err(CoreError::NothingSelected)));
        assert!(draft.lines.is_empty());
        assert_eq!(draft.selection.ingredient_id, "1");
    }

    #[test]
    fn test_remove_line() {
        let mut draft = RecipeDraft::new();
        draft.add_line("1", 1.0).unwrap();
        draft.add_line("4", 2.0).unwrap();

        let removed = draft.remove_line(0).unwrap();
        assert_eq!(removed.ingredient_id, "1");
        assert_eq!(draft.lines[0].ingredient_id, "4");

        assert!(matches!(
            draft.remove_line(5),
            Err(CoreError::LineOutOfRange { index: 5, len: 1 })
        ));
    }

    #[test]
    fn test_clear() {
        let mut draft = RecipeDraft::new();
        draft.set_name("Mint");
        draft.add_line("1", 1.0).unwrap();
        draft.clear();
        assert_eq!(draft, RecipeDraft::default());
    }
}
