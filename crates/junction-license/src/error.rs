//! # License Error Types
//!
//! Error types for the license activation engine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  NIC enumeration / file I/O failure                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LicenseError (this module) ← adds context and categorization          │
//! │       │                                                                 │
//! │       ├── is_activated():  every variant resolves to `false`           │
//! │       │                    (the gate never crashes the app)            │
//! │       │                                                                 │
//! │       └── activate():      surfaced to the activation prompt           │
//! │            ActivationRejected is user-visible, not a system fault      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use junction_core::error::ValidationError;

/// License activation errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// No qualifying network interface exists on this host.
    ///
    /// ## When This Occurs
    /// - Every NIC name matches the virtualization/loopback denylist
    /// - No interface has an IPv4 address and a non-zero hardware address
    ///
    /// Recoverable: the caller surfaces it to the user instead of crashing.
    #[error("no qualifying network interface found on this host")]
    FingerprintUnavailable,

    /// The supplied key does not match the key derived for this fingerprint.
    ///
    /// User-visible (a mistyped or wrong key), not logged as a system fault.
    /// Nothing is written to the store.
    #[error("activation rejected: key does not match this device")]
    ActivationRejected,

    /// Activation input failed validation before reaching the KDF.
    #[error("invalid activation input: {0}")]
    Validation(#[from] ValidationError),

    /// The license store could not be written.
    ///
    /// Read failures never surface here; a corrupt or unreadable file is
    /// treated as "no license" by [`crate::store::LicenseStore::load`].
    #[error("license store I/O failed: {0}")]
    Store(#[from] std::io::Error),

    /// The license record could not be serialized.
    #[error("license record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

// =============================================================================
// Unit Tests
// =============================================================================
