//! # Printer Configuration
//!
//! The printer settings payload owned by the (out-of-scope) settings
//! component, and its one-time conversion into a [`PrinterTarget`].
//!
//! ## Settings Payload
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Printer Settings (JSON)                              │
//! │                                                                         │
//! │  {                                                                      │
//! │    "printerType": "USB" | "WIFI",                                       │
//! │    "printerIP":   "192.168.11.110",   (WIFI)                            │
//! │    "printerPort": 9100,               (WIFI)                            │
//! │    "printerName": "POS-80C",          (USB)                             │
//! │    "restaurantName": "Pizza Junction"                                   │
//! │  }                                                                      │
//! │                                                                         │
//! │  The old implementation re-branched on the raw "USB"/"WIFI" string      │
//! │  inside every print call; here the string becomes a tagged              │
//! │  PrinterTarget once, at configuration load.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{PrintError, PrintResult};
use crate::transport::PrinterTarget;

// =============================================================================
// Printer Kind
// =============================================================================

/// How the printer is attached, as stored in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PrinterKind {
    /// Locally attached printer reached through the host spooler.
    #[serde(rename = "USB")]
    Usb,

    /// Network thermal printer speaking raw TCP (typically port 9100).
    #[serde(rename = "WIFI")]
    Wifi,
}

// =============================================================================
// Printer Config
// =============================================================================

/// Printer settings as persisted by the settings component.
///
/// Connection fields are optional in the payload; [`PrinterConfig::target`]
/// enforces that the fields required by the selected kind are present, with
/// a typed error instead of a runtime surprise mid-print.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PrinterConfig {
    /// Printer attachment kind.
    pub printer_type: PrinterKind,

    /// Printer host address (WIFI).
    #[serde(default, rename = "printerIP")]
    pub printer_ip: Option<String>,

    /// Printer TCP port (WIFI), typically 9100.
    #[serde(default)]
    pub printer_port: Option<u16>,

    /// Spooler device name (USB), e.g. "POS-80C".
    #[serde(default)]
    pub printer_name: Option<String>,

    /// Merchant name printed at the top of every receipt.
    pub restaurant_name: String,
}

impl PrinterConfig {
    /// Converts the settings payload into a transport target.
    ///
    /// Called once at configuration load; print calls receive the resulting
    /// [`PrinterTarget`] and never inspect the raw settings again.
    pub fn target(&self) -> PrintResult<PrinterTarget> {
        match self.printer_type {
            PrinterKind::Usb => {
                let device_name = self
                    .printer_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| {
                        PrintError::Config("printerName is required for USB printers".to_string())
                    })?;
                Ok(PrinterTarget::LocalSpooler {
                    device_name: device_name.to_string(),
                })
            }
            PrinterKind::Wifi => {
                let host = self
                    .printer_ip
                    .as_deref()
                    .map(str::trim)
                    .filter(|host| !host.is_empty())
                    .ok_or_else(|| {
                        PrintError::Config("printerIP is required for WIFI printers".to_string())
                    })?;
                let port = self.printer_port.ok_or_else(|| {
                    PrintError::Config("printerPort is required for WIFI printers".to_string())
                })?;
                Ok(PrinterTarget::NetworkRaw {
                    host: host.to_string(),
                    port,
                })
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
