//! # Inventory State
//!
//! The session's inventory and the recipe form draft.
//!
//! ## Thread Safety
//! Both are wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command may read or modify them
//! 2. Only one command should modify them at a time
//! 3. The order reset timer runs as a separate task and needs its own handle
//!
//! ## Lock Order
//! Commands that need both take the inventory lock first, then the draft.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend Action          Command                 State Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │  Record Production ─────► record_production() ──► inventory (write)    │
//! │  Pick recipe line ──────► add_draft_line() ─────► draft (write)        │
//! │  New ingr. in recipe ───► add_draft_ingredient()► inventory + draft    │
//! │  Order placed + 3s ─────► timer task ───────────► inventory (write)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use scoop_core::{Inventory, RecipeDraft};

/// Shared handle to the session inventory.
///
/// Cloning yields another handle to the same inventory.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    inventory: Arc<Mutex<Inventory>>,
}

impl InventoryState {
    pub fn new(inventory: Inventory) -> Self {
        InventoryState {
            inventory: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Executes a function with read access to the inventory.
    ///
    /// A poisoned lock is recovered: every inventory operation either
    /// completes or leaves state untouched, so the data stays consistent.
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Inventory) -> R,
    {
        let inventory = self.inventory.lock().unwrap_or_else(PoisonError::into_inner);
        f(&inventory)
    }

    /// Executes a function with write access to the inventory.
    pub fn with_inventory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Inventory) -> R,
    {
        let mut inventory = self.inventory.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inventory)
    }
}

/// The "Add Recipe" form, kept between events.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    draft: Arc<Mutex<RecipeDraft>>,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RecipeDraft) -> R,
    {
        let draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&draft)
    }

    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RecipeDraft) -> R,
    {
        let mut draft = self.draft.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut draft)
    }
}
