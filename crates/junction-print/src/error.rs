//! # Print Error Types
//!
//! Error types for the printer output driver.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ReceiptError (junction-core)        socket/spooler failure             │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  PrintError::Encoding              PrintError::Transport                │
//! │       │                                    │                            │
//! │       └────────────────┬───────────────────┘                            │
//! │                        ▼                                                │
//! │  logged at the print boundary; returned as a completion signal so      │
//! │  callers and tests can observe it. The order's persisted record is     │
//! │  independent of print success.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use junction_core::error::ReceiptError;

/// Printer output driver errors.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The document must not be printed (e.g. total mismatch).
    ///
    /// Blocking here is deliberate: printing an incorrect total is worse
    /// than printing nothing.
    #[error("receipt could not be encoded: {0}")]
    Encoding(#[from] ReceiptError),

    /// The printer settings payload cannot be turned into a target.
    ///
    /// ## When This Occurs
    /// - `printerType` is "WIFI" but `printerIP`/`printerPort` are missing
    /// - `printerType` is "USB" but `printerName` is missing
    #[error("printer configuration invalid: {0}")]
    Config(String),

    /// Delivery to the printer failed.
    ///
    /// Connect failure, write failure, timeout, and a missing spooler
    /// device all land here, with the target and underlying cause. No
    /// retry is attempted by this crate.
    #[error("print transport to {target} failed: {reason}")]
    Transport { target: String, reason: String },
}

impl PrintError {
    /// Creates a Transport error for a given target and cause.
    pub fn transport(target: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        PrintError::Transport {
            target: target.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for print operations.
pub type PrintResult<T> = Result<T, PrintError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_message() {
        let err = PrintError::transport("192.168.11.110:9100", "connection refused");
        assert_eq!(
            err.to_string(),
            "print transport to 192.168.11.110:9100 failed: connection refused"
        );
    }

    #[test]
    fn test_encoding_error_converts() {
        let receipt_err = ReceiptError::Validation(
            junction_core::error::ValidationError::Required {
                field: "name".to_string(),
            },
        );
        let err: PrintError = receipt_err.into();
        assert!(matches!(err, PrintError::Encoding(_)));
    }
}
