//! # Commands Module
//!
//! One function per dashboard action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports, Response)
//! ├── ingredient.rs  ◄─── Snapshot, add / edit ingredients, thresholds
//! ├── recipe.rs      ◄─── Recipe form draft, add recipes
//! ├── production.rs  ◄─── Preview and record production runs
//! ├── order.rs       ◄─── Reorder widget, order placement + reset timer
//! ├── alerts.rs      ◄─── Alert feed
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs inventory
//! fn update_alert_threshold(inventory: &InventoryState, ...)
//!
//! // Needs inventory and the recipe form
//! fn add_draft_ingredient(inventory: &InventoryState, draft: &DraftState, ...)
//! ```
//!
//! Commands never touch the alert feed themselves. They return their
//! notices in a [`Response`] and the session appends them.

pub mod alerts;
pub mod config;
pub mod ingredient;
pub mod order;
pub mod production;
pub mod recipe;

use serde::Serialize;
use scoop_core::Notice;

/// A command result plus the toasts it raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    pub data: T,
    pub notices: Vec<Notice>,
}

impl<T> Response<T> {
    /// A response with no notices.
    pub fn quiet(data: T) -> Self {
        Response {
            data,
            notices: Vec::new(),
        }
    }

    pub fn with_notice(data: T, notice: Notice) -> Self {
        Response {
            data,
            notices: vec![notice],
        }
    }

    pub fn push(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }
}
