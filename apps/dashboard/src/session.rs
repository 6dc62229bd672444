//! # Session
//!
//! The event loop that stands between the frontend and the commands.
//!
//! ## Wire Format
//! One JSON event per input line, one JSON reply per output line:
//! ```text
//! → {"command": "add_to_order", "ingredientId": "2", "quantity": 5}
//! ← {"ok": true, "data": {...}, "notices": [{"title": "Added to Order", ...}]}
//!
//! → {"command": "place_order"}
//! ← {"ok": false, "error": {"code": "EMPTY_ORDER", "message": "Your order is empty"},
//!    "notices": [{"title": "Error", "variant": "destructive", ...}]}
//! ```
//!
//! Every notice in a reply is also appended to the alert feed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::commands::{self, Response};
use crate::error::ApiError;
use crate::state::AppState;
use scoop_core::{IngredientPatch, NewIngredient, Notice, RecipeLine};

/// A frontend action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DashboardEvent {
    GetDashboard,
    GetConfig,
    GetAlerts,
    GetOrder,
    GetDraft,
    DismissAlert {
        index: usize,
    },
    AddIngredient {
        ingredient: NewIngredient,
    },
    #[serde(rename_all = "camelCase")]
    UpdateAlertThreshold {
        ingredient_id: String,
        threshold: f64,
    },
    #[serde(rename_all = "camelCase")]
    UpdateIngredient {
        ingredient_id: String,
        patch: IngredientPatch,
    },
    SetDraftName {
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    SelectDraftLine {
        ingredient_id: String,
        #[serde(default = "default_line_quantity")]
        quantity: f64,
    },
    AddDraftLine,
    RemoveDraftLine {
        index: usize,
    },
    ClearDraft,
    AddDraftIngredient {
        ingredient: NewIngredient,
    },
    CommitDraft,
    AddRecipe {
        name: String,
        ingredients: Vec<RecipeLine>,
    },
    #[serde(rename_all = "camelCase")]
    PreviewProduction {
        recipe_id: String,
        tubs: u32,
    },
    #[serde(rename_all = "camelCase")]
    RecordProduction {
        recipe_id: String,
        tubs: u32,
    },
    #[serde(rename_all = "camelCase")]
    AddToOrder {
        ingredient_id: String,
        quantity: f64,
    },
    #[serde(rename_all = "camelCase")]
    RemoveFromOrder {
        ingredient_id: String,
    },
    PlaceOrder,
}

fn default_line_quantity() -> f64 {
    1.0
}

/// One line of output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub notices: Vec<Notice>,
}

fn to_value<T: Serialize>(data: T) -> Result<Value, ApiError> {
    serde_json::to_value(data).map_err(|e| ApiError::internal(e.to_string()))
}

fn reply<T: Serialize>(response: Response<T>) -> Result<Response<Value>, ApiError> {
    Ok(Response {
        data: to_value(response.data)?,
        notices: response.notices,
    })
}

fn quiet<T: Serialize>(data: T) -> Result<Response<Value>, ApiError> {
    Ok(Response::quiet(to_value(data)?))
}

/// Routes one event to its command.
pub async fn dispatch(state: &AppState, event: DashboardEvent) -> Result<Response<Value>, ApiError> {
    let AppState {
        inventory,
        draft,
        alerts,
        config,
    } = state;

    match event {
        DashboardEvent::GetDashboard => quiet(commands::ingredient::get_dashboard(inventory, config)),
        DashboardEvent::GetConfig => quiet(commands::config::get_config(config)),
        DashboardEvent::GetAlerts => quiet(commands::alerts::get_alerts(alerts)),
        DashboardEvent::GetOrder => quiet(commands::order::get_order(inventory, config)),
        DashboardEvent::GetDraft => quiet(commands::recipe::get_draft(draft)),
        DashboardEvent::DismissAlert { index } => {
            quiet(commands::alerts::dismiss_alert(alerts, index)?)
        }
        DashboardEvent::AddIngredient { ingredient } => {
            reply(commands::ingredient::add_ingredient(inventory, config, ingredient)?)
        }
        DashboardEvent::UpdateAlertThreshold {
            ingredient_id,
            threshold,
        } => reply(commands::ingredient::update_alert_threshold(
            inventory,
            ingredient_id,
            threshold,
        )?),
        DashboardEvent::UpdateIngredient {
            ingredient_id,
            patch,
        } => reply(commands::ingredient::update_ingredient(
            inventory,
            ingredient_id,
            patch,
        )?),
        DashboardEvent::SetDraftName { name } => quiet(commands::recipe::set_draft_name(draft, name)),
        DashboardEvent::SelectDraftLine {
            ingredient_id,
            quantity,
        } => quiet(commands::recipe::select_draft_line(
            draft,
            ingredient_id,
            quantity,
        )),
        DashboardEvent::AddDraftLine => quiet(commands::recipe::add_draft_line(draft)?),
        DashboardEvent::RemoveDraftLine { index } => {
            quiet(commands::recipe::remove_draft_line(draft, index)?)
        }
        DashboardEvent::ClearDraft => quiet(commands::recipe::clear_draft(draft)),
        DashboardEvent::AddDraftIngredient { ingredient } => reply(
            commands::recipe::add_draft_ingredient(inventory, draft, config, ingredient)?,
        ),
        DashboardEvent::CommitDraft => reply(commands::recipe::commit_draft(inventory, draft)?),
        DashboardEvent::AddRecipe { name, ingredients } => {
            reply(commands::recipe::add_recipe(inventory, name, ingredients)?)
        }
        DashboardEvent::PreviewProduction { recipe_id, tubs } => quiet(
            commands::production::preview_production(inventory, recipe_id, tubs)?,
        ),
        DashboardEvent::RecordProduction { recipe_id, tubs } => reply(
            commands::production::record_production(inventory, recipe_id, tubs)?,
        ),
        DashboardEvent::AddToOrder {
            ingredient_id,
            quantity,
        } => reply(commands::order::add_to_order(
            inventory,
            config,
            ingredient_id,
            quantity,
        )),
        DashboardEvent::RemoveFromOrder { ingredient_id } => reply(
            commands::order::remove_from_order(inventory, config, ingredient_id),
        ),
        DashboardEvent::PlaceOrder => reply(commands::order::place_order(inventory, config).await?),
    }
}

/// Parses and dispatches one input line, recording its notices.
pub async fn handle_line(state: &AppState, line: &str) -> EventReply {
    let result = match serde_json::from_str::<DashboardEvent>(line) {
        Ok(event) => {
            debug!(?event, "event received");
            dispatch(state, event).await
        }
        Err(err) => Err(ApiError::from(err)),
    };

    let reply = match result {
        Ok(response) => EventReply {
            ok: true,
            data: Some(response.data),
            error: None,
            notices: response.notices,
        },
        Err(err) => {
            warn!(code = ?err.code, message = %err.message, "command failed");
            EventReply {
                ok: false,
                data: None,
                notices: vec![err.to_notice()],
                error: Some(err),
            }
        }
    };

    state.alerts.push_all(&reply.notices);
    reply
}

/// Serves events until the reader is exhausted.
///
/// Blank lines are skipped. Order reset timers keep running on the runtime
/// after the last event.
pub async fn run_event_loop<R, W>(state: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_line(state, &line).await;
        let mut out = serde_json::to_string(&reply)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
    }

    debug!("input closed");
    Ok(())
}
