//! # Scoop Dashboard Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Scoop Dashboard                                  │
//! │                                                                         │
//! │  Frontend ── one JSON event per line ──► stdin                          │
//! │                                            │                            │
//! │                                            ▼                            │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the tokio runtime                         │  │
//! │  │  lib.rs ─────► Logging, config, state                           │  │
//! │  │  session.rs ─► Event loop, dispatch                             │  │
//! │  │  commands/ ──► add_ingredient, record_production, place_order   │  │
//! │  │  state/ ─────► InventoryState, DraftState, AlertState, Config   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                            │                            │
//! │  Frontend ◄── one JSON reply per line ── stdout                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = scoop_dashboard::run().await {
        tracing::error!(error = %err, "dashboard stopped");
        std::process::exit(1);
    }
}
