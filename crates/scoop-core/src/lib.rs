//! # scoop-core: Pure Business Logic for Scoop
//!
//! This crate is the **heart** of Scoop, the inventory dashboard for a small
//! ice-cream kitchen. It tracks ingredient stock, recipes, production runs
//! and reorders as plain in-memory data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Scoop Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard Frontend                           │   │
//! │  │  Inventory Chart ──► Order Widget ──► Recipes ──► Production    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON events                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Dashboard Commands (apps/dashboard)             │   │
//! │  │   add_ingredient, record_production, place_order, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ scoop-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │   order   │  │   stock   │  │   │
//! │  │   │Ingredient │  │ Inventory │  │ OrderBook │  │StockLevel │  │   │
//! │  │   │  Recipe   │  │production │  │  Receipt  │  │ low stock │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO TIMERS • SYNCHRONOUS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Ingredient, Recipe, OrderItem, ProductionEntry)
//! - [`inventory`] - The inventory state manager and its operations
//! - [`stock`] - Stock percentages and low-stock classification
//! - [`order`] - Pending order lines and submission tickets
//! - [`recipe`] - Recipe drafts built up line by line
//! - [`money`] - Integer-cent money for order estimates
//! - [`notice`] - User-facing notices produced by operations
//! - [`validation`] - Field validation rules
//! - [`seed`] - Demo kitchen data
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use scoop_core::seed::demo_inventory;
//!
//! let mut inventory = demo_inventory();
//!
//! // Three tubs of vanilla: 1 gallon milk, 1 cup vanilla, 2 cups sugar per tub
//! let outcome = inventory.record_production("1", 3).unwrap();
//! assert_eq!(outcome.entry.tubs, 3);
//!
//! let milk = inventory.ingredient("1").unwrap();
//! assert_eq!(milk.quantity, 73.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod notice;
pub mod order;
pub mod recipe;
pub mod seed;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, ProductionOutcome, ProductionPreviewLine};
pub use money::Money;
pub use notice::{Notice, NoticeVariant};
pub use order::{OrderBook, OrderReceipt, OrderStatus};
pub use recipe::{LineSelection, RecipeDraft};
pub use stock::{LowStockItem, StockLevel};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Alert threshold (percent of max quantity) used when an ingredient has none.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 20.0;

/// Placeholder supplier price per order line, in cents ($25.99).
///
/// Suppliers are not priced individually yet; every line is estimated
/// at the same flat rate.
pub const DEFAULT_LINE_COST_CENTS: i64 = 2599;

/// Name shown for a recipe line whose ingredient no longer exists.
pub const UNKNOWN_INGREDIENT: &str = "Unknown";
