//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Scoop                                  │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  {"command": "place_order"}                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ──── CoreError::RecipeNotFound("...") ─┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Bad form? ────── CoreError::Validation ──────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── { "ok": false, "error": { "code": "EMPTY_ORDER", ... },           │
//! │        "notices": [{ "title": "Error", "variant": "destructive" }] }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The failed command changes nothing; the frontend shows the destructive
//! notice built by [`ApiError::to_notice`].

use serde::Serialize;
use scoop_core::{CoreError, Notice};

/// API error returned from dashboard commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Recipe not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown ingredient, recipe or alert
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Order placement with nothing pending
    EmptyOrder,

    /// Recipe draft operation failed
    DraftError,

    /// Event could not be parsed
    BadRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// The destructive "Error" notice shown for this failure.
    pub fn to_notice(&self) -> Notice {
        Notice::error(self.message.clone())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IngredientNotFound(id) => ApiError::not_found("Ingredient", &id),
            CoreError::RecipeNotFound(id) => ApiError::not_found("Recipe", &id),
            CoreError::AlertOutOfRange { index } => {
                ApiError::not_found("Alert", &index.to_string())
            }
            e @ CoreError::EmptyOrder => ApiError::new(ErrorCode::EmptyOrder, e.to_string()),
            e @ (CoreError::NothingSelected | CoreError::LineOutOfRange { .. }) => {
                ApiError::new(ErrorCode::DraftError, e.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts JSON errors (malformed events) to API errors.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid event: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use scoop_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        let err = ApiError::from(CoreError::RecipeNotFound("42".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Recipe not found: 42");

        let err = ApiError::from(CoreError::EmptyOrder);
        assert_eq!(err.code, ErrorCode::EmptyOrder);
        assert_eq!(err.message, "Your order is empty");

        let err = ApiError::from(CoreError::NothingSelected);
        assert_eq!(err.code, ErrorCode::DraftError);

        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::from(CoreError::EmptyOrder)).unwrap();
        assert_eq!(json["code"], "EMPTY_ORDER");
        assert_eq!(json["message"], "Your order is empty");
    }

    #[test]
    fn test_to_notice_is_destructive() {
        let notice = ApiError::from(CoreError::EmptyOrder).to_notice();
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description, "Your order is empty");
        assert!(notice.is_destructive());
    }
}
