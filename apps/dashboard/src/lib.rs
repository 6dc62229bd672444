//! # Scoop Dashboard Library
//!
//! Session shell for the Scoop inventory dashboard.
//! Loads configuration, builds session state and serves frontend events.
//!
//! ## Module Organization
//! ```text
//! scoop_dashboard/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState, exports
//! │   ├── inventory.rs◄─── InventoryState, DraftState (Mutex-protected)
//! │   ├── alerts.rs   ◄─── AlertState (bounded notice feed)
//! │   └── config.rs   ◄─── ConfigState (SCOOP_* environment)
//! ├── commands/       ◄─── One function per dashboard action
//! ├── session.rs      ◄─── JSON-lines event loop
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryState   ingredients, recipes, pending order                   │
//! │  DraftState       the "Add Recipe" form                                 │
//! │  AlertState       dismissable notices                                   │
//! │  ConfigState      read-only settings                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod session;
pub mod state;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppState, ConfigState};

/// Runs the dashboard session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (debug for scoop crates), override with RUST_LOG    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • SCOOP_* environment variables over defaults                       │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • InventoryState: demo kitchen or empty                             │
/// │     • DraftState, AlertState: empty                                     │
/// │                                                                         │
/// │  4. Serve Events ─────────────────────────────────────────────────────► │
/// │     • One JSON event per stdin line, one reply per stdout line          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Scoop inventory dashboard");

    let config = ConfigState::load()?;
    info!(
        store = %config.store_name,
        seed_demo = config.seed_demo,
        order_reset_ms = config.order_reset_delay_ms,
        "Configuration loaded"
    );

    let state = AppState::new(config);
    info!(
        ingredients = state.inventory.with_inventory(|inv| inv.ingredients().len()),
        "State initialized"
    );

    session::run_event_loop(&state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    info!("Session closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries event replies.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=scoop=trace` - Show trace for scoop crates only
/// - Default: INFO, DEBUG for scoop crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scoop=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
