//! # Alert State
//!
//! The dismissable alert feed. Every notice a command produces lands here
//! until the user dismisses it or it scrolls out of the bounded feed.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use scoop_core::{CoreError, CoreResult, Notice};

#[derive(Debug, Clone)]
pub struct AlertState {
    alerts: Arc<Mutex<VecDeque<Notice>>>,
    capacity: usize,
}

impl AlertState {
    pub fn new(capacity: usize) -> Self {
        AlertState {
            alerts: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Appends notices, dropping the oldest beyond capacity.
    pub fn push_all<'a>(&self, notices: impl IntoIterator<Item = &'a Notice>) {
        let mut alerts = self.alerts.lock().unwrap_or_else(PoisonError::into_inner);
        for notice in notices {
            if alerts.len() == self.capacity {
                alerts.pop_front();
            }
            alerts.push_back(notice.clone());
        }
    }

    /// Current alerts, oldest first.
    pub fn list(&self) -> Vec<Notice> {
        let alerts = self.alerts.lock().unwrap_or_else(PoisonError::into_inner);
        alerts.iter().cloned().collect()
    }

    /// Removes the alert at `index`.
    pub fn dismiss(&self, index: usize) -> CoreResult<Notice> {
        let mut alerts = self.alerts.lock().unwrap_or_else(PoisonError::into_inner);
        alerts
            .remove(index)
            .ok_or(CoreError::AlertOutOfRange { index })
    }
}

impl Default for AlertState {
    fn default() -> Self {
        AlertState::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let alerts = AlertState::default();
        alerts.push_all(&[Notice::low_stock(), Notice::info("Recipe Added", "Mint")]);

        let dismissed = alerts.dismiss(0).unwrap();
        assert_eq!(dismissed.title, "Low Stock Alert");
        assert_eq!(alerts.list().len(), 1);

        assert!(matches!(
            alerts.dismiss(3),
            Err(CoreError::AlertOutOfRange { index: 3 })
        ));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let alerts = AlertState::new(2);
        alerts.push_all(&[
            Notice::info("a", ""),
            Notice::info("b", ""),
            Notice::info("c", ""),
        ]);

        let titles: Vec<String> = alerts.list().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }
}
