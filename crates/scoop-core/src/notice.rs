//! # Notices
//!
//! Transient user-facing messages produced by inventory operations.
//!
//! The core only decides *what* to say; the frontend decides how long a
//! toast stays up.
//!
//! ```text
//! add_ingredient ──► Notice { "Ingredient Added", "Heavy Cream has been added..." }
//! place_order(∅) ──► Notice { "Error", "Your order is empty", Destructive }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Errors and stock warnings.
    Destructive,
}

/// A message for the toast area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    /// A confirmation notice.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    /// A notice shown with [`NoticeVariant::Destructive`] styling.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    /// The generic failure notice for a rejected operation.
    pub fn error(description: impl Into<String>) -> Self {
        Notice::destructive("Error", description)
    }

    /// Raised after production leaves something under its threshold.
    pub fn low_stock() -> Self {
        Notice::destructive(
            "Low Stock Alert",
            "Some ingredients are running low. Check the ordering widget.",
        )
    }

    #[inline]
    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

impl From<&CoreError> for Notice {
    fn from(err: &CoreError) -> Self {
        Notice::error(err.to_string())
    }
}
