//! # Alert Commands

use tracing::debug;

use crate::error::ApiError;
use crate::state::AlertState;
use scoop_core::Notice;

/// Gets the alert feed, oldest first.
pub fn get_alerts(alerts: &AlertState) -> Vec<Notice> {
    debug!("get_alerts command");
    alerts.list()
}

/// Dismisses one alert and returns the remaining feed.
pub fn dismiss_alert(alerts: &AlertState, index: usize) -> Result<Vec<Notice>, ApiError> {
    debug!(index, "dismiss_alert command");
    alerts.dismiss(index)?;
    Ok(alerts.list())
}
