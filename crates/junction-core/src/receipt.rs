//! # Receipt Encoder
//!
//! Pure function from a [`ReceiptDocument`] to the ESC/POS control-byte
//! stream a thermal receipt printer consumes.
//!
//! ## Output Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Encoded Receipt Stream                            │
//! │                                                                         │
//! │  ESC @            printer reset                                         │
//! │  ESC a 1          center alignment                                      │
//! │  "Pizza Junction\n"                                                     │
//! │  ESC a 0          left alignment                                        │
//! │  "──────────── (30 dashes) ────────────\n"                              │
//! │  "2 x Fries ..... 500\n"        one per line, input order               │
//! │  "──────────── (30 dashes) ────────────\n"                              │
//! │  "Total: 500\n"                                                         │
//! │  "\n\n\n"         paper feed                                            │
//! │  GS V 0           full paper cut                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every control sequence is a fixed byte constant; only the textual content
//! (merchant name, item lines, totals) varies. The encoder never touches the
//! file system, network, or clock, so identical documents encode to
//! byte-identical streams and tests can assert exact output.

use crate::error::ReceiptError;
use crate::types::ReceiptDocument;

// =============================================================================
// ESC/POS Control Sequences
// =============================================================================
// These are wire constants recognized by ESC/POS thermal printers.
// They are part of the printed-receipt contract and are not configurable.

/// ESC `@` — initialize (reset) the printer.
pub const INIT: &[u8] = &[0x1B, 0x40];

/// ESC `a` 1 — center alignment.
pub const ALIGN_CENTER: &[u8] = &[0x1B, 0x61, 0x01];

/// ESC `a` 0 — left alignment.
pub const ALIGN_LEFT: &[u8] = &[0x1B, 0x61, 0x00];

/// GS `V` 0 — full paper cut.
pub const FULL_CUT: &[u8] = &[0x1D, 0x56, 0x00];

/// Width of the separator rule, in characters (standard 80mm paper).
pub const SEPARATOR_WIDTH: usize = 30;

/// Blank lines fed after the total so the cut lands below the text.
const FEED_LINES: usize = 3;

// =============================================================================
// Encoder
// =============================================================================

/// Encodes a receipt document into an ESC/POS byte stream.
///
/// Pure, no I/O. The document is validated first; a total that disagrees
/// with the line sum blocks encoding rather than printing a wrong amount
/// (see [`ReceiptError::TotalMismatch`]).
///
/// ## Example
/// ```rust
/// use junction_core::{receipt, Money, ReceiptDocument, ReceiptLine};
///
/// let doc = ReceiptDocument {
///     header: "Pizza Junction".to_string(),
///     lines: vec![ReceiptLine {
///         name: "Fries".to_string(),
///         quantity: 2,
///         unit_price: Money::from_units(250),
///     }],
///     total: Money::from_units(500),
/// };
///
/// let bytes = receipt::encode(&doc).unwrap();
/// let text = String::from_utf8_lossy(&bytes);
/// assert!(text.contains("2 x Fries ..... 500"));
/// assert!(text.contains("Total: 500"));
/// ```
pub fn encode(doc: &ReceiptDocument) -> Result<Vec<u8>, ReceiptError> {
    doc.validate()?;

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = Vec::with_capacity(128 + doc.lines.len() * 48);

    // Reset, then centered merchant header.
    out.extend_from_slice(INIT);
    out.extend_from_slice(ALIGN_CENTER);
    out.extend_from_slice(doc.header.as_bytes());
    out.push(b'\n');

    // Body is left-aligned.
    out.extend_from_slice(ALIGN_LEFT);
    out.extend_from_slice(separator.as_bytes());
    out.push(b'\n');

    for line in &doc.lines {
        let text = format!("{} x {} ..... {}\n", line.quantity, line.name, line.line_total());
        out.extend_from_slice(text.as_bytes());
    }

    out.extend_from_slice(separator.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(format!("Total: {}\n", doc.total).as_bytes());

    // Feed past the cutter, then cut.
    out.extend_from_slice(&[b'\n'].repeat(FEED_LINES));
    out.extend_from_slice(FULL_CUT);

    Ok(out)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ReceiptLine;

    fn line(name: &str, qty: i64, price: i64) -> ReceiptLine {
        ReceiptLine {
            name: name.to_string(),
            quantity: qty,
            unit_price: Money::from_units(price),
        }
    }

    fn fries_doc() -> ReceiptDocument {
        ReceiptDocument {
            header: "Pizza Junction".to_string(),
            lines: vec![line("Fries", 2, 250)],
            total: Money::from_units(500),
        }
    }

    /// The full byte-exact contract for the reference document.
    #[test]
    fn test_exact_output_bytes() {
        let bytes = encode(&fries_doc()).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&[0x1B, 0x40]); // reset
        expected.extend_from_slice(&[0x1B, 0x61, 0x01]); // center
        expected.extend_from_slice(b"Pizza Junction\n");
        expected.extend_from_slice(&[0x1B, 0x61, 0x00]); // left
        expected.extend_from_slice(b"------------------------------\n");
        expected.extend_from_slice(b"2 x Fries ..... 500\n");
        expected.extend_from_slice(b"------------------------------\n");
        expected.extend_from_slice(b"Total: 500\n");
        expected.extend_from_slice(b"\n\n\n");
        expected.extend_from_slice(&[0x1D, 0x56, 0x00]); // full cut

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let doc = fries_doc();
        assert_eq!(encode(&doc).unwrap(), encode(&doc).unwrap());
    }

    #[test]
    fn test_control_bytes_bracket_the_text() {
        let bytes = encode(&fries_doc()).unwrap();
        assert!(bytes.starts_with(INIT));
        assert!(bytes.ends_with(FULL_CUT));
    }

    #[test]
    fn test_lines_appear_in_input_order() {
        let doc = ReceiptDocument {
            header: "Pizza Junction".to_string(),
            lines: vec![line("Cappuccino", 1, 500), line("Peach Milk Tea", 2, 550)],
            total: Money::from_units(1600),
        };

        let bytes = encode(&doc).unwrap();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let first = text.find("1 x Cappuccino ..... 500").unwrap();
        let second = text.find("2 x Peach Milk Tea ..... 1100").unwrap();
        assert!(first < second);
        assert!(text.contains("Total: 1600"));
    }

    #[test]
    fn test_total_mismatch_blocks_encoding() {
        let mut doc = fries_doc();
        doc.total = Money::from_units(9999);
        let err = encode(&doc).unwrap_err();
        assert!(matches!(err, ReceiptError::TotalMismatch { .. }));
    }

    #[test]
    fn test_invalid_line_blocks_encoding() {
        let mut doc = fries_doc();
        doc.lines[0].quantity = -2;
        assert!(encode(&doc).is_err());
    }
}
