//! # Validation Module
//!
//! Form validation rules for Scoop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── Input types (number fields, required markers)                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Blank names and units                                             │
//! │  ├── Negative stock, non-positive capacity                             │
//! │  └── Empty recipes, zero tubs                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Inventory mutation (only reached when every rule passes)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use scoop_core::validation::{validate_name, validate_tubs};
//!
//! assert!(validate_name("name", "Whole Milk").is_ok());
//! assert!(validate_tubs(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{NewIngredient, RecipeLine};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Rules
/// - Must not be empty after trimming whitespace
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Turns a blank optional text field into `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be finite
/// - Must be zero or more (an empty shelf is fine)
pub fn validate_stock_quantity(quantity: f64) -> ValidationResult<()> {
    validate_finite("quantity", quantity)?;

    if quantity < 0.0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a positive amount (capacity, recipe line quantity, order amount).
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the number of tubs produced in one run.
pub fn validate_tubs(tubs: u32) -> ValidationResult<()> {
    if tubs == 0 {
        return Err(ValidationError::MustBePositive {
            field: "tubs".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the "Add Ingredient" form.
///
/// ## Rules
/// - name non-blank
/// - quantity >= 0
/// - unit non-blank
/// - max quantity > 0
///
/// The alert threshold is deliberately left unchecked.
pub fn validate_new_ingredient(form: &NewIngredient) -> ValidationResult<()> {
    validate_name("name", &form.name)?;
    validate_stock_quantity(form.quantity)?;
    validate_name("unit", &form.unit)?;
    validate_positive("max quantity", form.max_quantity)?;

    Ok(())
}

/// Validates a recipe before it is added.
///
/// ## Rules
/// - name non-blank
/// - at least one ingredient line
pub fn validate_recipe(name: &str, lines: &[RecipeLine]) -> ValidationResult<()> {
    validate_name("recipe name", name)?;

    if lines.is_empty() {
        return Err(ValidationError::Empty {
            field: "ingredients".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
