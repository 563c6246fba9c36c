//! # Error Types
//!
//! Domain-specific error types for junction-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  junction-core errors (this file)                                      │
//! │  ├── ValidationError  - Malformed boundary input (fingerprint, key,    │
//! │  │                      receipt line)                                  │
//! │  └── ReceiptError     - Documents that must not reach the printer      │
//! │                                                                         │
//! │  junction-license errors (separate crate)                              │
//! │  └── LicenseError     - Fingerprint/store/activation failures          │
//! │                                                                         │
//! │  junction-print errors (separate crate)                                │
//! │  └── PrintError       - Encoding + transport failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → ReceiptError → PrintError → caller log        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when boundary input (an activation request from the UI,
/// an order handed to the print boundary) doesn't meet requirements. They are
/// raised before any key derivation or encoding runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., not a hardware address, not a hex key).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Monetary value must not be negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },
}

// =============================================================================
// Receipt Error
// =============================================================================

/// Errors that block a receipt from being encoded.
///
/// A document that fails here must never be printed: an incorrect total on
/// paper is worse than no receipt at all. The order record itself is
/// persisted elsewhere and is unaffected.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The declared total disagrees with the sum of the lines.
    ///
    /// ## When This Occurs
    /// - The caller recomputed its tab after building the snapshot
    /// - A corrupted IPC payload
    ///
    /// The total is rejected, never silently recomputed and trusted.
    #[error("declared total {declared} does not match computed total {computed}")]
    TotalMismatch { declared: Money, computed: Money },

    /// A receipt line failed validation (wraps ValidationError).
    #[error("invalid receipt: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "fingerprint".to_string(),
        };
        assert_eq!(err.to_string(), "fingerprint is required");

        let err = ValidationError::InvalidFormat {
            field: "fingerprint".to_string(),
            reason: "expected aa:bb:cc:dd:ee:ff".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fingerprint has invalid format: expected aa:bb:cc:dd:ee:ff"
        );
    }

    #[test]
    fn test_total_mismatch_message() {
        let err = ReceiptError::TotalMismatch {
            declared: Money::from_units(600),
            computed: Money::from_units(500),
        };
        assert_eq!(
            err.to_string(),
            "declared total 600 does not match computed total 500"
        );
    }

    #[test]
    fn test_validation_converts_to_receipt_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let receipt_err: ReceiptError = validation_err.into();
        assert!(matches!(receipt_err, ReceiptError::Validation(_)));
    }
}
