//! # Domain Types
//!
//! Core domain types used throughout the Junction POS core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Fingerprint    │   │ ActivationKey   │   │ LicenseRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  aa:bb:cc:..    │   │  16 hex chars   │   │  activated      │       │
//! │  │  lower-case     │   │  upper-case     │   │  mac + key      │       │
//! │  │  canonical      │   │  canonical      │   │  activatedAt    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ReceiptLine    │   │     Order       │   │ ReceiptDocument │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  items          │   │  header         │       │
//! │  │  qty            │   │  total          │   │  lines          │       │
//! │  │  price          │   │  (UI payload)   │   │  total          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonical Forms
//! Fingerprints are stored lower-case, activation keys upper-case. All
//! comparisons go through `matches()` and are case-insensitive, so records
//! written by older installs validate regardless of stored casing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ReceiptError, ValidationResult};
use crate::money::Money;
use crate::validation;

// =============================================================================
// Fingerprint
// =============================================================================

/// The hardware address of the host's primary network adapter, used as a
/// device identity proxy.
///
/// Canonical form is lower-case, colon-separated hex octets
/// (`aa:bb:cc:dd:ee:ff`). [`Fingerprint::parse`] is the only public
/// constructor, so every value built at a boundary is canonical; values
/// deserialized from an existing license file may carry legacy casing and
/// are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parses and canonicalizes a hardware-address string.
    ///
    /// ## Example
    /// ```rust
    /// use junction_core::types::Fingerprint;
    ///
    /// let fp = Fingerprint::parse("AA:BB:CC:DD:EE:FF").unwrap();
    /// assert_eq!(fp.as_str(), "aa:bb:cc:dd:ee:ff");
    ///
    /// assert!(Fingerprint::parse("not-a-mac").is_err());
    /// assert!(Fingerprint::parse("").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let raw = raw.trim();
        validation::validate_fingerprint(raw)?;
        Ok(Fingerprint(raw.to_ascii_lowercase()))
    }

    /// Returns the canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fingerprint, returning the inner string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Case-insensitive comparison against another fingerprint.
    ///
    /// Stored records may predate canonicalization, so equality of identity
    /// is always case-insensitive.
    #[inline]
    pub fn matches(&self, other: &Fingerprint) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Activation Key
// =============================================================================

/// The derived token proving a license was issued for a specific fingerprint.
///
/// A fixed-length (16 character) uppercase hex string: the truncated SHA-256
/// digest of `(fingerprint ++ shared-secret)`. See [`crate::kdf::derive`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivationKey(String);

impl ActivationKey {
    /// Parses an operator-supplied key string into canonical (uppercase) form.
    ///
    /// ## Example
    /// ```rust
    /// use junction_core::types::ActivationKey;
    ///
    /// let key = ActivationKey::parse("79f332c7c4ff9477").unwrap();
    /// assert_eq!(key.as_str(), "79F332C7C4FF9477");
    ///
    /// assert!(ActivationKey::parse("too-short").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let raw = raw.trim();
        validation::validate_activation_key(raw)?;
        Ok(ActivationKey(raw.to_ascii_uppercase()))
    }

    /// Builds a key from an already-canonical derivation result.
    ///
    /// Only the KDF constructs keys this way; everything else goes through
    /// [`ActivationKey::parse`].
    pub(crate) fn from_derived(canonical: String) -> Self {
        debug_assert!(canonical.len() == crate::ACTIVATION_KEY_LEN);
        ActivationKey(canonical)
    }

    /// Returns the canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a candidate key string.
    ///
    /// Customers type keys by hand; `79f3...` and `79F3...` are the same key.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.eq_ignore_ascii_case(candidate.trim())
    }
}

impl std::fmt::Display for ActivationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// License Record
// =============================================================================

/// The persisted activation record, owned exclusively by the license store.
///
/// ## File Compatibility
/// Serialized field names (`activated`, `mac`, `key`, `activatedAt`) match
/// the license files already in the field and MUST NOT change. The fingerprint
/// travels under the legacy name `mac`.
///
/// ## Invariant
/// If `activated == true`, then `key == derive(fingerprint)` and
/// `fingerprint` equals the fingerprint resolvable on the current host.
/// The invariant is recomputed on every check, never cached.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LicenseRecord {
    /// Whether this installation has been activated.
    pub activated: bool,

    /// The fingerprint this license was issued for (legacy field name "mac").
    #[serde(rename = "mac")]
    pub fingerprint: Fingerprint,

    /// The activation key proving issuance.
    pub key: ActivationKey,

    /// When the activation happened (ISO-8601 in the file).
    ///
    /// Optional on read: files written by the earliest builds carry only
    /// `activated`/`mac`/`key`, and those licenses must keep validating.
    /// Every record written by this code includes it.
    #[serde(rename = "activatedAt", default)]
    #[ts(as = "Option<String>")]
    pub activated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Receipt Types
// =============================================================================

/// One line of a receipt: a quantity of a named item at a unit price.
///
/// Serialized field names (`name`, `qty`, `price`) match the order payload
/// the UI layer already sends over IPC.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptLine {
    /// Item name as shown on the receipt.
    pub name: String,

    /// Quantity ordered. Must be positive.
    #[serde(rename = "qty")]
    pub quantity: i64,

    /// Price per unit. Must not be negative.
    #[serde(rename = "price")]
    pub unit_price: Money,
}

impl ReceiptLine {
    /// The extended total for this line (`quantity × unit_price`).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Validates name, quantity, and price bounds.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_receipt_line(self)
    }
}

/// A completed order as handed across the print boundary by the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Ordered items, in the order they were rung up.
    pub items: Vec<ReceiptLine>,

    /// Total the UI displayed to the customer. Validated, never trusted.
    pub total: Money,
}

/// The normalized representation of a completed order, ready for printer
/// encoding.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptDocument {
    /// Merchant name printed centered at the top.
    pub header: String,

    /// Receipt lines, printed in input order.
    pub lines: Vec<ReceiptLine>,

    /// Declared total. Must equal the sum of line totals.
    pub total: Money,
}

impl ReceiptDocument {
    /// Builds a document from an order snapshot and the merchant name from
    /// printer configuration.
    pub fn from_order(header: impl Into<String>, order: Order) -> Self {
        ReceiptDocument {
            header: header.into(),
            lines: order.items,
            total: order.total,
        }
    }

    /// Sum of line totals.
    pub fn computed_total(&self) -> Money {
        self.lines.iter().map(ReceiptLine::line_total).sum()
    }

    /// Validates every line plus the total invariant.
    ///
    /// ## Why reject instead of recompute?
    /// The declared total is what the customer was charged. If it disagrees
    /// with the lines, something upstream is corrupt and printing either
    /// number would be wrong.
    pub fn validate(&self) -> Result<(), ReceiptError> {
        for line in &self.lines {
            line.validate()?;
        }

        let computed = self.computed_total();
        if computed != self.total {
            return Err(ReceiptError::TotalMismatch {
                declared: self.total,
                computed,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fries_doc() -> ReceiptDocument {
        ReceiptDocument {
            header: "Pizza Junction".to_string(),
            lines: vec![ReceiptLine {
                name: "Fries".to_string(),
                quantity: 2,
                unit_price: Money::from_units(250),
            }],
            total: Money::from_units(500),
        }
    }

    #[test]
    fn test_fingerprint_parse_canonicalizes() {
        let fp = Fingerprint::parse("  AA:BB:CC:DD:EE:FF ").unwrap();
        assert_eq!(fp.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_fingerprint_matches_ignores_case() {
        let lower = Fingerprint::parse("aa:bb:cc:dd:ee:ff").unwrap();
        // Simulate a record written by an older install with upper-case mac.
        let upper: Fingerprint =
            serde_json::from_str("\"AA:BB:CC:DD:EE:FF\"").unwrap();
        assert!(lower.matches(&upper));
    }

    #[test]
    fn test_activation_key_parse_uppercases() {
        let key = ActivationKey::parse("79f332c7c4ff9477").unwrap();
        assert_eq!(key.as_str(), "79F332C7C4FF9477");
        assert!(key.matches(" 79f332c7c4ff9477 "));
        assert!(!key.matches("0000000000000000"));
    }

    #[test]
    fn test_license_record_json_shape() {
        // The on-disk shape is frozen: activated / mac / key / activatedAt.
        let record = LicenseRecord {
            activated: true,
            fingerprint: Fingerprint::parse("aa:bb:cc:dd:ee:ff").unwrap(),
            key: ActivationKey::parse("79F332C7C4FF9477").unwrap(),
            activated_at: Some("2024-03-01T12:00:00Z".parse().unwrap()),
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["activated"], true);
        assert_eq!(json["mac"], "aa:bb:cc:dd:ee:ff");
        assert_eq!(json["key"], "79F332C7C4FF9477");
        assert!(json["activatedAt"].as_str().unwrap().starts_with("2024-03-01T12:00:00"));
    }

    #[test]
    fn test_receipt_line_accepts_ui_payload_shape() {
        let line: ReceiptLine =
            serde_json::from_str(r#"{"name":"Fries","qty":2,"price":250}"#).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), Money::from_units(500));
    }

    #[test]
    fn test_document_validate_accepts_consistent_total() {
        assert!(fries_doc().validate().is_ok());
    }

    #[test]
    fn test_document_validate_rejects_total_mismatch() {
        let mut doc = fries_doc();
        doc.total = Money::from_units(600);
        let err = doc.validate().unwrap_err();
        assert!(matches!(err, ReceiptError::TotalMismatch { .. }));
    }

    #[test]
    fn test_document_validate_rejects_bad_lines() {
        let mut doc = fries_doc();
        doc.lines[0].quantity = 0;
        assert!(doc.validate().is_err());

        let mut doc = fries_doc();
        doc.lines[0].name = "  ".to_string();
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_empty_document_with_zero_total_is_valid() {
        let doc = ReceiptDocument {
            header: "Pizza Junction".to_string(),
            lines: vec![],
            total: Money::zero(),
        };
        assert!(doc.validate().is_ok());
    }
}
