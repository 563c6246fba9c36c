//! # Key Derivation
//!
//! Deterministic one-way mapping from a device fingerprint to an activation
//! key.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Activation Key Derivation                           │
//! │                                                                         │
//! │  fingerprint (canonical lower-case)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SHA-256( fingerprint ++ shared-secret )                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  hex digest (64 chars) ──► first 16 chars ──► upper-case                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ActivationKey  e.g. "79F332C7C4FF9477"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Derivation, Two Callers
//! The in-app activation check and the out-of-band `keygen` operator tool
//! both call [`derive`]. There is deliberately no second implementation
//! anywhere in the workspace: if the derivations diverged, every activation
//! would silently fail.
//!
//! ## Known Weak Trust Boundary
//! The fingerprint is a publicly readable hardware identifier and the secret
//! is embedded in the shipped binary, so the scheme is spoofable by a
//! determined user. That is an accepted property of the deployed licensing
//! contract; the derivation and file format are preserved for key
//! compatibility and intentionally NOT strengthened here.

use sha2::{Digest, Sha256};

use crate::types::{ActivationKey, Fingerprint};
use crate::ACTIVATION_KEY_LEN;

/// Shared secret appended to the fingerprint before hashing.
///
/// Compiled into the application AND into the operator keygen tool. Must
/// match the keys already issued to customers, so it is frozen.
const SHARED_SECRET: &str = "my-secret-salt";

/// Derives the activation key for a fingerprint.
///
/// Pure and deterministic: identical input always yields identical output.
/// The fingerprint is hashed in canonical lower-case form regardless of the
/// casing it was stored with, so records written by older installs derive
/// the same key.
///
/// ## Example
/// ```rust
/// use junction_core::{kdf, types::Fingerprint};
///
/// let fp = Fingerprint::parse("aa:bb:cc:dd:ee:ff").unwrap();
/// assert_eq!(kdf::derive(&fp).as_str(), "79F332C7C4FF9477");
/// ```
pub fn derive(fingerprint: &Fingerprint) -> ActivationKey {
    let mut hasher = Sha256::new();
    hasher.update(fingerprint.as_str().to_ascii_lowercase().as_bytes());
    hasher.update(SHARED_SECRET.as_bytes());
    let digest = hasher.finalize();

    let key = hex::encode(digest)[..ACTIVATION_KEY_LEN].to_ascii_uppercase();
    ActivationKey::from_derived(key)
}

// =============================================================================
// Unit Tests
// =============================================================================
