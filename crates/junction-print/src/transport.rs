//! # Printer Transport
//!
//! Delivers an encoded byte stream to a physical or networked printer.
//!
//! ## Transports
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Printer Transports                                 │
//! │                                                                         │
//! │  NetworkRaw (WIFI thermal printers, JetDirect port 9100)                │
//! │  ──────────────────────────────────────────────────────                 │
//! │  TCP connect (5s timeout) ──► write stream ──► flush ──► shutdown      │
//! │  The printer interprets the ESC/POS bytes natively; there is no        │
//! │  protocol negotiation and no feedback channel.                          │
//! │                                                                         │
//! │  LocalSpooler (USB printers behind the host spooler)                    │
//! │  ──────────────────────────────────────────────────────                 │
//! │  bytes ──► temp file ──► one raw spooler job, copy count 1,            │
//! │  no preview (Unix: lp -d <name> -o raw; Windows: copy /b to the        │
//! │  printer share)                                                         │
//! │                                                                         │
//! │  Both: new connection/job per print, no pooling, no automatic retry.    │
//! │  Every failure maps to PrintError::Transport with its cause.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io::Write as _;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::error::{PrintError, PrintResult};

/// Default raw TCP print port (HP JetDirect convention).
pub const RAW_PRINT_PORT: u16 = 9100;

/// Timeout for connecting and writing to a network printer.
///
/// Receipts are a few hundred bytes; a printer that hasn't accepted them
/// within a few seconds is down, and the cashier needs to know now, not
/// after a 60 second hang.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the spooler hand-off subprocess.
const SPOOLER_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Printer Target
// =============================================================================

/// Where a print job goes. Decided once at configuration load
/// (see [`crate::config::PrinterConfig::target`]), never re-probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterTarget {
    /// The host's native print spooler, addressed by device name.
    LocalSpooler {
        /// Spooler device name, e.g. "POS-80C".
        device_name: String,
    },

    /// A raw TCP socket on a network printer.
    NetworkRaw {
        /// Printer host or IP.
        host: String,
        /// TCP port, typically [`RAW_PRINT_PORT`].
        port: u16,
    },
}

impl fmt::Display for PrinterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterTarget::LocalSpooler { device_name } => {
                write!(f, "spooler device '{device_name}'")
            }
            PrinterTarget::NetworkRaw { host, port } => write!(f, "{host}:{port}"),
        }
    }
}

// =============================================================================
// Send
// =============================================================================

/// Delivers a byte stream to the target printer.
///
/// One job per call: a fresh socket or spooler job each time, closed when
/// the write completes. Errors carry the target and cause; no retry is
/// attempted here.
pub async fn send(target: &PrinterTarget, payload: &[u8]) -> PrintResult<()> {
    match target {
        PrinterTarget::NetworkRaw { host, port } => {
            send_raw(target, host, *port, payload, CONNECT_TIMEOUT).await
        }
        PrinterTarget::LocalSpooler { device_name } => {
            send_spooler(target, device_name, payload).await
        }
    }
}

/// Raw TCP delivery: connect, write everything, flush, shut down.
pub(crate) async fn send_raw(
    target: &PrinterTarget,
    host: &str,
    port: u16,
    payload: &[u8],
    timeout: Duration,
) -> PrintResult<()> {
    let addr = format!("{host}:{port}");
    debug!(%addr, bytes = payload.len(), "connecting to network printer");

    let mut stream = tokio::time::timeout(timeout, TcpStream::connect(&addr))
        .await
        .map_err(|_| {
            PrintError::transport(target, format!("connect timed out after {timeout:?}"))
        })?
        .map_err(|err| PrintError::transport(target, format!("connect failed: {err}")))?;

    tokio::time::timeout(timeout, async {
        stream.write_all(payload).await?;
        stream.flush().await?;
        stream.shutdown().await
    })
    .await
    .map_err(|_| PrintError::transport(target, format!("write timed out after {timeout:?}")))?
    .map_err(|err| PrintError::transport(target, format!("write failed: {err}")))?;

    info!(%addr, bytes = payload.len(), "receipt sent to network printer");
    Ok(())
}

/// Spooler delivery: stage the bytes in a temp file and submit one raw job.
async fn send_spooler(
    target: &PrinterTarget,
    device_name: &str,
    payload: &[u8],
) -> PrintResult<()> {
    // The spooler reads from a path, so stage the stream in a temp file
    // that lives until the job has been submitted.
    let mut staging = tempfile::NamedTempFile::new()
        .map_err(|err| PrintError::transport(target, format!("staging file: {err}")))?;
    staging
        .write_all(payload)
        .and_then(|_| staging.flush())
        .map_err(|err| PrintError::transport(target, format!("staging file: {err}")))?;

    let output = tokio::time::timeout(
        SPOOLER_TIMEOUT,
        spooler_command(device_name, staging.path()).output(),
    )
    .await
    .map_err(|_| {
        PrintError::transport(target, format!("spooler timed out after {SPOOLER_TIMEOUT:?}"))
    })?
    .map_err(|err| PrintError::transport(target, format!("spooler unavailable: {err}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PrintError::transport(
            target,
            format!("spooler rejected job: {}", stderr.trim()),
        ));
    }

    info!(device = device_name, bytes = payload.len(), "receipt handed to spooler");
    Ok(())
}

/// One raw job, one copy, no preview.
#[cfg(unix)]
fn spooler_command(device_name: &str, path: &std::path::Path) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("lp");
    cmd.arg("-d")
        .arg(device_name)
        .arg("-o")
        .arg("raw")
        .arg("-n")
        .arg("1")
        .arg(path);
    cmd
}

/// Raw copy to the printer share; the Windows spooler passes bytes through.
#[cfg(windows)]
fn spooler_command(device_name: &str, path: &std::path::Path) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("cmd");
    cmd.arg("/C")
        .arg("copy")
        .arg("/b")
        .arg(path)
        .arg(format!(r"\\localhost\{device_name}"));
    cmd
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_network_raw_delivers_exact_bytes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let target = PrinterTarget::NetworkRaw {
            host: addr.ip().to_string(),
            port: addr.port(),
        };
        let payload = b"\x1B\x40receipt bytes\x1D\x56\x00";
        send(&target, payload).await.unwrap();

        assert_eq!(server.await.unwrap(), payload);
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_transport_error() {
        // Bind to grab a free port, then drop the listener so the connect
        // is refused.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let target = PrinterTarget::NetworkRaw {
            host: addr.ip().to_string(),
            port: addr.port(),
        };
        let err = send(&target, b"receipt").await.unwrap_err();
        assert!(matches!(err, PrintError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_errors_within_the_timeout() {
        // Non-routable address: the connect either times out or is
        // rejected by the local stack; both must surface as a transport
        // error, bounded by the timeout rather than hanging.
        let target = PrinterTarget::NetworkRaw {
            host: "10.255.255.1".to_string(),
            port: RAW_PRINT_PORT,
        };

        let started = std::time::Instant::now();
        let result = send_raw(
            &target,
            "10.255.255.1",
            RAW_PRINT_PORT,
            b"receipt",
            Duration::from_millis(250),
        )
        .await;

        assert!(matches!(result, Err(PrintError::Transport { .. })));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_spooler_device_is_a_transport_error() {
        let target = PrinterTarget::LocalSpooler {
            device_name: "no-such-printer-device".to_string(),
        };
        let err = send(&target, b"receipt").await.unwrap_err();
        assert!(matches!(err, PrintError::Transport { .. }));
    }

    #[test]
    fn test_target_display() {
        let spooler = PrinterTarget::LocalSpooler {
            device_name: "POS-80C".to_string(),
        };
        assert_eq!(spooler.to_string(), "spooler device 'POS-80C'");

        let raw = PrinterTarget::NetworkRaw {
            host: "192.168.11.110".to_string(),
            port: 9100,
        };
        assert_eq!(raw.to_string(), "192.168.11.110:9100");
    }
}
