//! # junction-license: License Activation Engine
//!
//! Device-locked licensing for Junction POS. The application is bound to a
//! single machine via the hardware address of its primary network adapter.
//!
//! ## Activation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Activation Flow                                  │
//! │                                                                         │
//! │  startup ──► is_activated()?                                            │
//! │                 │                                                       │
//! │      ┌──────────┴──────────┐                                            │
//! │      ▼ true                ▼ false                                      │
//! │  order-taking         UI shows activation prompt                        │
//! │  enabled                   │                                            │
//! │                            ▼                                            │
//! │            customer reads fingerprint() ──► sends it to the operator    │
//! │                            │                                            │
//! │                            ▼                                            │
//! │            operator runs `keygen` ──► customer types the key back       │
//! │                            │                                            │
//! │                            ▼                                            │
//! │            activate(fingerprint, key) ──► license.json written          │
//! │                                                                         │
//! │  Validity is recomputed from stored data + current fingerprint on      │
//! │  every check; there is no persistent "revoked" state.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! - **Boolean gate, never a crash**: a missing NIC, an absent license file,
//!   or corrupt JSON all resolve to "not activated".
//! - **No singletons**: the store path and fingerprint source are explicit
//!   constructor state.
//! - **One KDF**: key verification calls [`junction_core::kdf::derive`], the
//!   same function the operator tool runs.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod activation;
pub mod error;
pub mod fingerprint;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use activation::ActivationService;
pub use error::{LicenseError, LicenseResult};
pub use fingerprint::{FingerprintSource, HostFingerprint, INTERFACE_DENYLIST};
pub use store::LicenseStore;
