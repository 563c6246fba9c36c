//! # junction-core: Pure Business Logic for Junction POS
//!
//! This crate is the **heart** of the Junction POS core. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Junction POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  POS Shell (out of scope)                       │   │
//! │  │    Menu CRUD ──► Bill Tabs ──► Checkout ──► Sales Reports      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ "activated?" / "print this"            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ junction-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │    kdf    │  │  receipt  │  │   │
//! │  │   │Fingerprint│  │   Money   │  │  derive   │  │  encode   │  │   │
//! │  │   │ Receipt   │  │ integers  │  │  SHA-256  │  │  ESC/POS  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │          ┌─────────────────────┴──────────────────────┐                │
//! │          ▼                                            ▼                │
//! │  ┌────────────────────┐                   ┌────────────────────┐      │
//! │  │  junction-license  │                   │  junction-print    │      │
//! │  │  license.json +    │                   │  spooler / raw TCP │      │
//! │  │  NIC fingerprint   │                   │  delivery          │      │
//! │  └────────────────────┘                   └────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Fingerprint, LicenseRecord, ReceiptDocument)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`kdf`] - Deterministic activation key derivation
//! - [`receipt`] - Receipt-to-control-byte encoder
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole currency units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use junction_core::{kdf, types::Fingerprint};
//!
//! let fingerprint = Fingerprint::parse("AA:BB:CC:DD:EE:FF").unwrap();
//!
//! // Deterministic: the operator keygen tool and the activation check
//! // both call this exact function.
//! let key = kdf::derive(&fingerprint);
//! assert_eq!(key.as_str(), "79F332C7C4FF9477");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kdf;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use junction_core::Money` instead of
// `use junction_core::money::Money`

pub use error::{ReceiptError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of hex octets in a hardware (MAC) address.
///
/// ## Why a constant?
/// The fingerprint validator and the resolver both reason about address
/// shape; keeping the octet count in one place means they cannot disagree.
pub const FINGERPRINT_OCTETS: usize = 6;

/// Length of a derived activation key, in hex characters.
///
/// ## Compatibility
/// Keys already issued to customers are 16 characters. Changing this value
/// invalidates every key in the field, so it is frozen.
pub const ACTIVATION_KEY_LEN: usize = 16;
