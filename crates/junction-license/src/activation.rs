//! # Activation State Machine
//!
//! Orchestrates the fingerprint resolver, the KDF, and the license store to
//! answer "is this installation activated?" and to process activation
//! attempts.
//!
//! ## Validity Is Recomputed, Never Cached
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      is_activated() Decision                            │
//! │                                                                         │
//! │  load record ──► absent / invalid / activated=false?      → false      │
//! │       │                                                                 │
//! │  resolve current fingerprint ──► unresolvable?            → false      │
//! │       │                                                                 │
//! │  stored mac ≠ current mac (case-insensitive)?             → false      │
//! │  (the license file was copied to another machine)                       │
//! │       │                                                                 │
//! │  derive(stored mac) ≠ stored key?                         → false      │
//! │  (the file was edited by hand)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │     true                                                                │
//! │                                                                         │
//! │  There is no persistent "revoked" state: moving back to the            │
//! │  original machine makes the same record valid again.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{info, warn};

use junction_core::kdf;
use junction_core::types::{Fingerprint, LicenseRecord};

use crate::error::{LicenseError, LicenseResult};
use crate::fingerprint::{FingerprintSource, HostFingerprint};
use crate::store::LicenseStore;

/// The activation engine consumed by the UI shell.
///
/// Generic over the fingerprint source so tests can simulate "this license
/// file moved to another machine" without touching real NICs.
#[derive(Debug)]
pub struct ActivationService<S = HostFingerprint> {
    store: LicenseStore,
    source: S,
}

impl ActivationService<HostFingerprint> {
    /// Creates a service over the given store, resolving fingerprints from
    /// the host's real network interfaces.
    pub fn new(store: LicenseStore) -> Self {
        ActivationService {
            store,
            source: HostFingerprint,
        }
    }
}

impl<S: FingerprintSource> ActivationService<S> {
    /// Creates a service with an explicit fingerprint source.
    pub fn with_source(store: LicenseStore, source: S) -> Self {
        ActivationService { store, source }
    }

    /// The `getFingerprint` boundary: the current device fingerprint for
    /// display in the activation prompt, or `None` if no qualifying
    /// interface exists (surfaced to the user, never a crash).
    pub fn fingerprint(&self) -> Option<String> {
        match self.source.resolve() {
            Ok(fingerprint) => Some(fingerprint.into_string()),
            Err(err) => {
                warn!(%err, "device fingerprint unavailable");
                None
            }
        }
    }

    /// Whether this installation is activated on this machine, right now.
    ///
    /// A pure function of the stored record and the current fingerprint.
    /// Every failure mode resolves to `false`; this gate must never take
    /// the application down.
    pub fn is_activated(&self) -> bool {
        let Some(record) = self.store.load() else {
            return false;
        };

        if !record.activated {
            return false;
        }

        let Ok(current) = self.source.resolve() else {
            return false;
        };

        if !record.fingerprint.matches(&current) {
            info!(
                stored = %record.fingerprint,
                current = %current,
                "license fingerprint does not match this machine"
            );
            return false;
        }

        // Keys were derived from the stored fingerprint at issue time;
        // re-derive and compare to catch hand-edited records.
        kdf::derive(&record.fingerprint).matches(record.key.as_str())
    }

    /// Processes an activation attempt from the activation prompt.
    ///
    /// Input is validated before the KDF runs; a malformed fingerprint is a
    /// typed validation error, not a rejection. On a key mismatch nothing is
    /// written. On success the whole record is persisted and returned.
    pub fn activate(&self, fingerprint: &str, key: &str) -> LicenseResult<LicenseRecord> {
        let fingerprint = Fingerprint::parse(fingerprint)?;

        let expected = kdf::derive(&fingerprint);
        if !expected.matches(key) {
            return Err(LicenseError::ActivationRejected);
        }

        let record = LicenseRecord {
            activated: true,
            fingerprint,
            key: expected,
            activated_at: Some(Utc::now()),
        };
        self.store.save(&record)?;

        info!(fingerprint = %record.fingerprint, "installation activated");
        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
