//! # Production Commands
//!
//! The "Record Production" dialog.

use tracing::{debug, info, warn};

use crate::commands::Response;
use crate::error::ApiError;
use crate::state::InventoryState;
use scoop_core::{Notice, ProductionOutcome, ProductionPreviewLine};

/// Shows what a production run would consume, without applying it.
pub fn preview_production(
    inventory: &InventoryState,
    recipe_id: String,
    tubs: u32,
) -> Result<Vec<ProductionPreviewLine>, ApiError> {
    debug!(recipe_id = %recipe_id, tubs, "preview_production command");
    let preview = inventory.with_inventory(|inv| inv.preview_production(&recipe_id, tubs))?;
    Ok(preview)
}

/// Records a production run and consumes its ingredients.
///
/// ## Notices
/// - "Production Recorded" always
/// - "Low Stock Alert" when a consumed ingredient fell under its threshold
pub fn record_production(
    inventory: &InventoryState,
    recipe_id: String,
    tubs: u32,
) -> Result<Response<ProductionOutcome>, ApiError> {
    debug!(recipe_id = %recipe_id, tubs, "record_production command");

    let outcome = inventory.with_inventory_mut(|inv| inv.record_production(&recipe_id, tubs))?;
    info!(recipe = %outcome.recipe_name, tubs, "production recorded");

    let recorded = Notice::info(
        "Production Recorded",
        format!(
            "{} tubs of {} recorded and inventory updated",
            tubs, outcome.recipe_name
        ),
    );
    let low_stock = outcome.low_stock_alert();
    if low_stock {
        warn!(ingredients = ?outcome.low_stock, "low stock after production");
    }

    let mut response = Response::with_notice(outcome, recorded);
    if low_stock {
        response = response.push(Notice::low_stock());
    }
    Ok(response)
}
