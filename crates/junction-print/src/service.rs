//! # Print Service
//!
//! The print boundary the UI shell calls when an order completes.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        print_bill                                       │
//! │                                                                         │
//! │  PrinterConfig ──► PrinterTarget        Order ──► ReceiptDocument       │
//! │         │                                   │                           │
//! │         └──────────────┬────────────────────┘                           │
//! │                        ▼                                                │
//! │            print_receipt(target, &doc)                                  │
//! │                        │                                                │
//! │            encode (rejects bad totals) ──► transport::send              │
//! │                                                                         │
//! │  The result is a completion signal. The order was persisted before     │
//! │  this call; a dead printer loses paper, never data.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{error, info};

use junction_core::receipt;
use junction_core::types::{Order, ReceiptDocument};

use crate::config::PrinterConfig;
use crate::error::PrintResult;
use crate::transport::{self, PrinterTarget};

/// Encodes a receipt document and delivers it to the target printer.
///
/// The document is validated by the encoder; a declared total that does not
/// match the line items blocks the print before any socket is opened.
pub async fn print_receipt(target: &PrinterTarget, document: &ReceiptDocument) -> PrintResult<()> {
    let payload = receipt::encode(document).map_err(|err| {
        error!(%target, %err, "receipt rejected before printing");
        err
    })?;

    match transport::send(target, &payload).await {
        Ok(()) => {
            info!(%target, lines = document.lines.len(), "receipt printed");
            Ok(())
        }
        Err(err) => {
            error!(%target, %err, "receipt delivery failed");
            Err(err)
        }
    }
}

/// Prints the bill for a completed order using the stored printer settings.
///
/// This is the call the UI shell makes at order completion. The merchant
/// name from settings becomes the receipt header.
pub async fn print_bill(config: &PrinterConfig, order: Order) -> PrintResult<()> {
    let target = config.target()?;
    let document = ReceiptDocument::from_order(config.restaurant_name.clone(), order);
    print_receipt(&target, &document).await
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrinterKind;
    use crate::error::PrintError;
    use junction_core::money::Money;
    use junction_core::types::ReceiptLine;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    fn order() -> Order {
        Order {
            items: vec![
                ReceiptLine {
                    name: "Cappuccino".to_string(),
                    quantity: 2,
                    unit_price: Money::from_units(500),
                },
                ReceiptLine {
                    name: "Peach Milk Tea".to_string(),
                    quantity: 1,
                    unit_price: Money::from_units(600),
                },
            ],
            total: Money::from_units(1600),
        }
    }

    #[tokio::test]
    async fn test_print_bill_delivers_encoded_receipt() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let config = PrinterConfig {
            printer_type: PrinterKind::Wifi,
            printer_ip: Some(addr.ip().to_string()),
            printer_port: Some(addr.port()),
            printer_name: None,
            restaurant_name: "Pizza Junction".to_string(),
        };

        print_bill(&config, order()).await.unwrap();

        let received = server.await.unwrap();
        let expected = receipt::encode(&ReceiptDocument::from_order(
            "Pizza Junction".to_string(),
            order(),
        ))
        .unwrap();
        assert_eq!(received, expected);
        assert!(received.starts_with(receipt::INIT));
        assert!(received.ends_with(receipt::FULL_CUT));
    }

    #[tokio::test]
    async fn test_total_mismatch_blocks_before_any_socket() {
        // Unreachable target: if the encoder didn't block first, the test
        // would fail with a transport error instead of an encoding error.
        let target = PrinterTarget::NetworkRaw {
            host: "10.255.255.1".to_string(),
            port: 9100,
        };

        let mut bad = order();
        bad.total = Money::from_units(9999);
        let document = ReceiptDocument::from_order("Pizza Junction".to_string(), bad);

        let err = print_receipt(&target, &document).await.unwrap_err();
        assert!(matches!(err, PrintError::Encoding(_)));
    }

    #[tokio::test]
    async fn test_incomplete_config_is_a_config_error() {
        let config = PrinterConfig {
            printer_type: PrinterKind::Usb,
            printer_ip: None,
            printer_port: None,
            printer_name: None,
            restaurant_name: "Pizza Junction".to_string(),
        };
        let err = print_bill(&config, order()).await.unwrap_err();
        assert!(matches!(err, PrintError::Config(_)));
    }
}
