//! # Config Commands
//!
//! Commands for retrieving dashboard configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current dashboard configuration.
///
/// ## When Used
/// - Startup (header, currency formatting)
/// - New ingredient form (default alert threshold)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
