//! # State Module
//!
//! Manages session state for the dashboard.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct behind one lock, each concern gets its own
//! state type. Commands declare exactly what they need, and independent
//! states don't block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │InventoryState│  │  DraftState  │  │  AlertState  │  │ ConfigState │ │
//! │  │              │  │              │  │              │  │             │ │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │ store name  │ │
//! │  │   Inventory  │  │  RecipeDraft │  │   VecDeque   │  │ reset delay │ │
//! │  │  >>          │  │  >>          │  │  >>          │  │ line cost   │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘ │
//! │                                                                         │
//! │  ConfigState is read-only after startup.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod alerts;
mod config;
mod inventory;

pub use alerts::AlertState;
pub use config::{ConfigError, ConfigState};
pub use inventory::{DraftState, InventoryState};

use scoop_core::seed::demo_inventory;
use scoop_core::Inventory;

/// Every state type of one session, bundled for the event loop.
#[derive(Debug, Clone)]
pub struct AppState {
    pub inventory: InventoryState,
    pub draft: DraftState,
    pub alerts: AlertState,
    pub config: ConfigState,
}

impl AppState {
    /// Builds fresh session state, seeded with the demo kitchen when
    /// configured.
    pub fn new(config: ConfigState) -> Self {
        let inventory = if config.seed_demo {
            demo_inventory()
        } else {
            Inventory::new()
        };

        AppState {
            inventory: InventoryState::new(inventory),
            draft: DraftState::new(),
            alerts: AlertState::new(config.max_alerts),
            config,
        }
    }
}
