//! # Error Types
//!
//! Domain-specific error types for scoop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scoop-core errors (this file)                                         │
//! │  ├── CoreError        - Lookup and workflow failures                   │
//! │  └── ValidationError  - Form field failures                            │
//! │                                                                         │
//! │  Dashboard errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → destructive Notice     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation that returns one of these errors leaves the inventory
//! exactly as it was.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No ingredient with this id exists in the inventory.
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    /// No recipe with this id exists.
    ///
    /// ## When This Occurs
    /// - Production dialog submitted with a stale recipe selection
    /// - Preview requested for a recipe that was never added
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Order placement attempted with no pending lines.
    #[error("Your order is empty")]
    EmptyOrder,

    /// A recipe line was added without choosing an ingredient.
    #[error("Please select an ingredient and specify a quantity")]
    NothingSelected,

    /// Recipe draft line index is out of bounds.
    #[error("Recipe line {index} does not exist (draft has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// Alert index is out of bounds.
    #[error("Alert {index} does not exist")]
    AlertOutOfRange { index: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched, so a failed form submission is
/// always a no-op.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// A collection that needs at least one entry is empty.
    #[error("{field} needs at least one entry")]
    Empty { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
