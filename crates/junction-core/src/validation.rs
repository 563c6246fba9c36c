//! # Validation Module
//!
//! Boundary input validation for the Junction POS core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI shell (out of scope)                                      │
//! │  ├── Basic format checks (empty fields)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (typed, before any derivation/encoding)          │
//! │  ├── Fingerprint must be a well-formed hardware address                │
//! │  ├── Activation key must be 16 hex characters                          │
//! │  └── Receipt lines must have positive qty, non-negative price          │
//! │                                                                         │
//! │  The old implementation duck-typed IPC payloads at runtime             │
//! │  ("is this a string?"); these validators replace that with typed       │
//! │  errors raised before input reaches the KDF or the encoder.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use junction_core::validation::validate_fingerprint;
//!
//! assert!(validate_fingerprint("aa:bb:cc:dd:ee:ff").is_ok());
//! assert!(validate_fingerprint("kitchen-printer").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ReceiptLine;
use crate::{ACTIVATION_KEY_LEN, FINGERPRINT_OCTETS};

// =============================================================================
// Fingerprint / Key Validators
// =============================================================================

/// Validates a hardware-address string (`aa:bb:cc:dd:ee:ff`).
///
/// ## Rules
/// - Must not be empty
/// - Exactly six colon-separated groups
/// - Each group exactly two hex digits
///
/// Case is NOT checked here; canonicalization happens in
/// [`crate::types::Fingerprint::parse`].
pub fn validate_fingerprint(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "fingerprint".to_string(),
        });
    }

    let groups: Vec<&str> = raw.split(':').collect();
    let well_formed = groups.len() == FINGERPRINT_OCTETS
        && groups
            .iter()
            .all(|g| g.len() == 2 && g.chars().all(|c| c.is_ascii_hexdigit()));

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "fingerprint".to_string(),
            reason: "expected six colon-separated hex octets (aa:bb:cc:dd:ee:ff)".to_string(),
        });
    }

    Ok(())
}

/// Validates an activation key string.
///
/// ## Rules
/// - Must not be empty
/// - Exactly 16 hex characters (case-insensitive)
pub fn validate_activation_key(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "key".to_string(),
        });
    }

    if raw.len() != ACTIVATION_KEY_LEN || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidFormat {
            field: "key".to_string(),
            reason: format!("expected {ACTIVATION_KEY_LEN} hex characters"),
        });
    }

    Ok(())
}

// =============================================================================
// Receipt Validators
// =============================================================================

/// Validates a single receipt line.
///
/// ## Rules
/// - Item name must not be empty
/// - Quantity must be positive
/// - Unit price must not be negative
pub fn validate_receipt_line(line: &ReceiptLine) -> ValidationResult<()> {
    if line.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if line.quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "qty".to_string(),
        });
    }

    if line.unit_price.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
