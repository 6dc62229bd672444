//! # Order Commands
//!
//! The reorder widget: pending lines, placement, and the delayed reset.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_to_order ──► Open (lines) ──► place_order ──► Submitted (ticket N) │
//! │       ▲                                                 │               │
//! │       │                                 sleep(order_reset_delay)        │
//! │       │                                                 ▼               │
//! │       └──────────────────────────────────── finish_order(N) ── Open ──  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::commands::Response;
use crate::error::ApiError;
use crate::state::{ConfigState, InventoryState};
use scoop_core::{Inventory, Money, Notice, OrderItem, OrderReceipt, OrderStatus};

/// One pending order line with display names resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineView {
    pub ingredient_id: String,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

/// The order widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub items: Vec<OrderLineView>,
    pub status: OrderStatus,
    pub estimated_cost: Money,
    /// `estimated_cost` formatted for display
    pub estimated_cost_display: String,
}

impl OrderView {
    pub fn build(inventory: &Inventory, config: &ConfigState) -> Self {
        let order = inventory.order();
        let estimated_cost = order.estimated_cost(config.line_cost());

        OrderView {
            items: order
                .items()
                .iter()
                .map(|item: &OrderItem| OrderLineView {
                    ingredient_id: item.ingredient_id.clone(),
                    name: inventory.ingredient_name(&item.ingredient_id).to_string(),
                    unit: inventory.ingredient_unit(&item.ingredient_id).to_string(),
                    quantity: item.quantity,
                })
                .collect(),
            status: order.status(),
            estimated_cost,
            estimated_cost_display: config.format_money(estimated_cost),
        }
    }
}

/// Gets the order widget.
pub fn get_order(inventory: &InventoryState, config: &ConfigState) -> OrderView {
    debug!("get_order command");
    inventory.with_inventory(|inv| OrderView::build(inv, config))
}

/// Adds an ingredient to the pending order.
///
/// ## Behavior
/// - Already pending: quantities accumulate
/// - Unknown ingredient ids are accepted and shown as "Unknown"
pub fn add_to_order(
    inventory: &InventoryState,
    config: &ConfigState,
    ingredient_id: String,
    quantity: f64,
) -> Response<OrderView> {
    debug!(ingredient_id = %ingredient_id, quantity = %quantity, "add_to_order command");

    inventory.with_inventory_mut(|inv| {
        inv.add_to_order(&ingredient_id, quantity);
        let name = inv.ingredient_name(&ingredient_id).to_string();

        Response::with_notice(
            OrderView::build(inv, config),
            Notice::info("Added to Order", format!("{} added to your order", name)),
        )
    })
}

/// Removes an ingredient from the pending order. Missing lines are ignored.
pub fn remove_from_order(
    inventory: &InventoryState,
    config: &ConfigState,
    ingredient_id: String,
) -> Response<OrderView> {
    debug!(ingredient_id = %ingredient_id, "remove_from_order command");

    inventory.with_inventory_mut(|inv| {
        inv.remove_from_order(&ingredient_id);
        Response::quiet(OrderView::build(inv, config))
    })
}

/// Places the pending order.
///
/// ## Behavior
/// 1. Every ordered ingredient is replenished to its max quantity
/// 2. The order shows as submitted
/// 3. After `order_reset_delay` the lines clear, unless a newer order was
///    placed in the meantime
///
/// Must run inside a tokio runtime.
///
/// ## Errors
/// `EMPTY_ORDER` when nothing is pending.
pub async fn place_order(
    inventory: &InventoryState,
    config: &ConfigState,
) -> Result<Response<OrderReceipt>, ApiError> {
    debug!("place_order command");

    let receipt = inventory.with_inventory_mut(|inv| inv.place_order(config.line_cost()))?;
    info!(
        ticket = receipt.ticket,
        replenished = receipt.replenished.len(),
        estimated_cost = %config.format_money(receipt.estimated_cost),
        "order placed"
    );

    schedule_order_reset(inventory.clone(), receipt.ticket, config);

    let notice = Notice::info(
        "Order Placed Successfully",
        format!(
            "Inventory replenished to 100% for: {}",
            receipt.replenished.join(", ")
        ),
    );
    Ok(Response::with_notice(receipt, notice))
}

/// Spawns the timer that clears order `ticket` after the configured delay.
///
/// The task resolves to whether the reset applied.
pub fn schedule_order_reset(
    inventory: InventoryState,
    ticket: u64,
    config: &ConfigState,
) -> JoinHandle<bool> {
    let delay = config.order_reset_delay();

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let cleared = inventory.with_inventory_mut(|inv| inv.finish_order(ticket));
        if cleared {
            info!(ticket, "order reset");
        } else {
            debug!(ticket, "order reset skipped, superseded");
        }
        cleared
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoop_core::seed::demo_inventory;
    use std::time::Duration;

    fn setup() -> (InventoryState, ConfigState) {
        (InventoryState::new(demo_inventory()), ConfigState::default())
    }

    #[test]
    fn test_add_to_order_accumulates() {
        let (inventory, config) = setup();

        add_to_order(&inventory, &config, "2".to_string(), 5.0);
        let response = add_to_order(&inventory, &config, "2".to_string(), 2.0);

        assert_eq!(response.data.items.len(), 1);
        assert_eq!(response.data.items[0].quantity, 7.0);
        assert_eq!(response.data.items[0].name, "Vanilla Extract");
        assert_eq!(
            response.notices[0].description,
            "Vanilla Extract added to your order"
        );
        assert_eq!(response.data.estimated_cost_display, "$25.99");
    }

    #[test]
    fn test_estimate_uses_display_precision() {
        let (inventory, mut config) = setup();
        config.currency_decimals = 0;

        let response = add_to_order(&inventory, &config, "2".to_string(), 5.0);
        assert_eq!(response.data.estimated_cost.cents(), 2599);
        assert_eq!(response.data.estimated_cost_display, "$26");
    }

    #[test]
    fn test_remove_from_order() {
        let (inventory, config) = setup();
        add_to_order(&inventory, &config, "2".to_string(), 5.0);

        let response = remove_from_order(&inventory, &config, "2".to_string());
        assert!(response.data.items.is_empty());
        assert!(response.notices.is_empty());
    }

    #[tokio::test]
    async fn test_place_empty_order() {
        let (inventory, config) = setup();

        let err = place_order(&inventory, &config).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::EmptyOrder);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_replenishes_then_resets() {
        let (inventory, config) = setup();
        add_to_order(&inventory, &config, "2".to_string(), 5.0);
        add_to_order(&inventory, &config, "5".to_string(), 12.0);

        let response = place_order(&inventory, &config).await.unwrap();
        assert_eq!(response.data.replenished, vec!["Vanilla Extract", "Strawberry Puree"]);
        assert_eq!(
            response.notices[0].description,
            "Inventory replenished to 100% for: Vanilla Extract, Strawberry Puree"
        );

        inventory.with_inventory(|inv| {
            assert_eq!(inv.ingredient("2").unwrap().quantity, 5.0);
            assert_eq!(inv.ingredient("5").unwrap().quantity, 20.0);
            assert!(inv.order().is_submitted());
            assert_eq!(inv.order().len(), 2);
        });

        tokio::time::sleep(config.order_reset_delay() + Duration::from_millis(1)).await;

        inventory.with_inventory(|inv| {
            assert!(inv.order().is_empty());
            assert_eq!(inv.order().status(), OrderStatus::Open);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reset_is_ignored() {
        let (inventory, config) = setup();
        add_to_order(&inventory, &config, "2".to_string(), 5.0);
        let first = inventory
            .with_inventory_mut(|inv| inv.place_order(config.line_cost()))
            .unwrap();

        add_to_order(&inventory, &config, "3".to_string(), 30.0);
        inventory
            .with_inventory_mut(|inv| inv.place_order(config.line_cost()))
            .unwrap();

        let stale = schedule_order_reset(inventory.clone(), first.ticket, &config);
        assert!(!stale.await.unwrap());
        assert!(inventory.with_inventory(|inv| inv.order().is_submitted()));
    }
}
