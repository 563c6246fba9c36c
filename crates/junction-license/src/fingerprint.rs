//! # Fingerprint Resolver
//!
//! Discovers a stable hardware identifier for the host: the MAC address of
//! the primary non-virtual, non-loopback network adapter.
//!
//! ## Selection Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Interface Selection                                  │
//! │                                                                         │
//! │  for each host interface, in enumeration order:                        │
//! │    1. name contains "vbox"/"virtual"/"loopback"/"docker"?  → skip     │
//! │       (case-insensitive substring match)                               │
//! │    2. no non-loopback IPv4 address?                         → skip     │
//! │    3. hardware address missing or 00:00:00:00:00:00?        → skip     │
//! │    4. otherwise → THIS is the fingerprint (lower-cased)                │
//! │                                                                         │
//! │  nothing qualifies → FingerprintUnavailable (recoverable,              │
//! │  surfaced to the user, never a panic)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testability
//! The selection logic is a pure function over [`Candidate`] values; the
//! [`HostFingerprint`] source only maps real NICs into candidates. The
//! activation service depends on the [`FingerprintSource`] trait, so its
//! tests run without host hardware.

use network_interface::{NetworkInterface, NetworkInterfaceConfig};
use std::net::IpAddr;
use tracing::{debug, warn};

use junction_core::types::Fingerprint;

use crate::error::{LicenseError, LicenseResult};

/// Name substrings that disqualify an interface (virtual adapters,
/// loopback devices, container bridges). Matched case-insensitively.
pub const INTERFACE_DENYLIST: [&str; 4] = ["vbox", "virtual", "loopback", "docker"];

/// The all-zero hardware address some drivers report for inert adapters.
const ZERO_MAC: &str = "00:00:00:00:00:00";

// =============================================================================
// Fingerprint Source Trait
// =============================================================================

/// Something that can resolve the current device fingerprint.
///
/// Production uses [`HostFingerprint`]; tests substitute a fixed source so
/// "the license moved to another machine" is a one-line fixture change.
pub trait FingerprintSource {
    /// Resolves the fingerprint of the current device.
    fn resolve(&self) -> LicenseResult<Fingerprint>;
}

// =============================================================================
// Candidate Selection (pure)
// =============================================================================

/// A host interface reduced to the facts selection cares about.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    /// Interface name as reported by the OS (e.g. "eth0", "vboxnet0").
    pub name: String,
    /// Whether the interface has a non-loopback IPv4 address.
    pub ipv4: bool,
    /// Hardware address, if the OS reports one.
    pub mac: Option<String>,
}

/// Picks the first qualifying candidate, in input order.
pub(crate) fn select(candidates: &[Candidate]) -> Option<Fingerprint> {
    for candidate in candidates {
        let name = candidate.name.to_ascii_lowercase();
        if INTERFACE_DENYLIST.iter().any(|deny| name.contains(deny)) {
            debug!(interface = %candidate.name, "skipping denylisted interface");
            continue;
        }

        if !candidate.ipv4 {
            continue;
        }

        let Some(mac) = candidate.mac.as_deref() else {
            continue;
        };
        let mac = mac.to_ascii_lowercase();
        if mac == ZERO_MAC {
            continue;
        }

        match Fingerprint::parse(&mac) {
            Ok(fingerprint) => {
                debug!(interface = %candidate.name, %fingerprint, "resolved device fingerprint");
                return Some(fingerprint);
            }
            Err(err) => {
                // Some platforms report exotic address formats; skip rather
                // than fail the whole resolution.
                warn!(interface = %candidate.name, %err, "unparseable hardware address");
                continue;
            }
        }
    }

    None
}

// =============================================================================
// Host Fingerprint Source
// =============================================================================

/// Resolves the fingerprint from the host's real network interfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFingerprint;

impl FingerprintSource for HostFingerprint {
    fn resolve(&self) -> LicenseResult<Fingerprint> {
        let interfaces = NetworkInterface::show().map_err(|err| {
            warn!(%err, "network interface enumeration failed");
            LicenseError::FingerprintUnavailable
        })?;

        let candidates: Vec<Candidate> = interfaces
            .into_iter()
            .map(|iface| Candidate {
                ipv4: iface
                    .addr
                    .iter()
                    .any(|addr| matches!(addr.ip(), IpAddr::V4(ip) if !ip.is_loopback())),
                name: iface.name,
                mac: iface.mac_addr,
            })
            .collect();

        select(&candidates).ok_or(LicenseError::FingerprintUnavailable)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, ipv4: bool, mac: Option<&str>) -> Candidate {
        Candidate {
            name: name.to_string(),
            ipv4,
            mac: mac.map(str::to_string),
        }
    }

    #[test]
    fn test_selects_first_qualifying_interface() {
        let fingerprint = select(&[
            candidate("eth0", true, Some("AA:BB:CC:DD:EE:FF")),
            candidate("wlan0", true, Some("11:22:33:44:55:66")),
        ])
        .unwrap();
        assert_eq!(fingerprint.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_denylist_is_case_insensitive_substring() {
        let fingerprint = select(&[
            candidate("VirtualBox Host-Only", true, Some("0a:00:27:00:00:0b")),
            candidate("vboxnet0", true, Some("0a:00:27:00:00:0c")),
            candidate("docker0", true, Some("02:42:ac:11:00:02")),
            candidate("Loopback Pseudo-Interface 1", true, Some("02:00:4c:4f:4f:50")),
            candidate("eth0", true, Some("aa:bb:cc:dd:ee:ff")),
        ])
        .unwrap();
        assert_eq!(fingerprint.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_skips_interfaces_without_ipv4() {
        let fingerprint = select(&[
            candidate("eth0", false, Some("11:22:33:44:55:66")),
            candidate("eth1", true, Some("aa:bb:cc:dd:ee:ff")),
        ])
        .unwrap();
        assert_eq!(fingerprint.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_skips_zero_and_missing_mac() {
        let fingerprint = select(&[
            candidate("eth0", true, Some("00:00:00:00:00:00")),
            candidate("eth1", true, None),
            candidate("eth2", true, Some("aa:bb:cc:dd:ee:ff")),
        ])
        .unwrap();
        assert_eq!(fingerprint.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_nothing_qualifies() {
        assert!(select(&[
            candidate("docker0", true, Some("02:42:ac:11:00:02")),
            candidate("eth0", true, Some("00:00:00:00:00:00")),
            candidate("eth1", false, Some("11:22:33:44:55:66")),
        ])
        .is_none());
        assert!(select(&[]).is_none());
    }

    #[test]
    fn test_output_is_lower_case() {
        let fingerprint =
            select(&[candidate("en0", true, Some("DE:AD:BE:EF:00:01"))]).unwrap();
        assert_eq!(fingerprint.as_str(), "de:ad:be:ef:00:01");
    }
}
