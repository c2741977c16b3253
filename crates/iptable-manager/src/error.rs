//! Error types for IP table operations.

use thiserror::Error;

/// Invalid-argument rejections, raised before any console traffic.
///
/// Transport-level outcomes are never errors: operations report them as
/// `Ok(false)` and the caller checks the returned flag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IpTableError {
    /// Program slot outside the processor's range.
    #[error("invalid program slot {0} (processor slots are 0-10)")]
    InvalidSlot(u16),

    /// CIP ID 0 cannot address a peer.
    #[error("CIP_ID must be greater than 0")]
    InvalidCipId,

    /// Blank or whitespace-only peer address.
    #[error("IP address must not be blank")]
    InvalidIpAddress,

    /// Device ID 0 cannot be remapped.
    #[error("device ID must be greater than 0")]
    InvalidDeviceId,
}
