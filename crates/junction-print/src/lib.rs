//! # junction-print: Receipt Printer Output Driver
//!
//! Delivers encoded receipts to thermal printers over two transports.
//!
//! ## Print Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Print Path                                     │
//! │                                                                         │
//! │  UI shell: order completed                                              │
//! │       │  printBill({items, total})                                      │
//! │       ▼                                                                 │
//! │  service::print_bill ──► ReceiptDocument (header from settings)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  junction_core::receipt::encode  (pure, rejects bad totals)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  transport::send(PrinterTarget, bytes)                                  │
//! │       │                                                                 │
//! │       ├── LocalSpooler ──► host spooler, one raw job, one copy          │
//! │       └── NetworkRaw   ──► TCP connect (5s timeout), write, close       │
//! │                                                                         │
//! │  Failure → PrintError, logged. The order record was persisted           │
//! │  before printing and is never touched by a print failure.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! - **Config decides the transport once**: the settings payload converts to
//!   a [`PrinterTarget`] at load time; nothing re-probes per print call.
//! - **Best-effort**: transport errors are reported, never panicked, and no
//!   retry happens here (retry policy belongs to the caller).
//! - **Stateless jobs**: a new socket per job, no pooling, no shared state
//!   between concurrent prints.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod service;
pub mod transport;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{PrinterConfig, PrinterKind};
pub use error::{PrintError, PrintResult};
pub use service::{print_bill, print_receipt};
pub use transport::{PrinterTarget, CONNECT_TIMEOUT, RAW_PRINT_PORT};
