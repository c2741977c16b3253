//! A single IP table entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One directory record of a processor IP table.
///
/// The first five fields are the client-settable portion of an entry and are
/// the ones persisted when an entry is written out as JSON, under the names
/// the processor tooling uses. The remaining fields are descriptive: they
/// are only ever populated from parsed console output and are skipped during
/// serialization.
///
/// Every field defaults to zero or the empty string; no field is ever
/// "missing". Construction performs no validation; entries used as command
/// inputs are checked by the manager at the call site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpTableEntry {
    /// CIP ID the peer is addressed by (hex on the wire).
    #[serde(rename = "CIP_ID")]
    pub cip_id: u16,

    /// IP address or hostname of the peer.
    #[serde(rename = "IPAddress")]
    pub ip_address: String,

    /// TCP port of the peer.
    #[serde(rename = "Port")]
    pub port: u16,

    /// Remap ID allowing a runtime entry to override a programmed CIP ID
    /// (hex on the wire).
    #[serde(rename = "DeviceID")]
    pub device_id: u16,

    /// Program slot this entry belongs to.
    #[serde(rename = "ProgramSlot")]
    pub program_slot: u16,

    /// Room ID when the peer is a VC-4 instance.
    #[serde(skip)]
    pub room_id: String,

    /// Kind of entry, as reported by the processor.
    #[serde(skip)]
    pub entry_type: String,

    /// Connection status: ONLINE, OFFLINE, NOT_REG, ...
    #[serde(skip)]
    pub status: String,

    /// Model name of the peer equipment.
    #[serde(skip)]
    pub model_name: String,

    /// Description attached to the entry in the control program.
    #[serde(skip)]
    pub description: String,
}

impl IpTableEntry {
    /// Create an empty entry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for IpTableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProgramID - {}, CIP_ID - {:X}, IPAddress - '{}', Port - {}, RoomID - '{}', \
             DeviceID - {:X}, Type - '{}', Status - '{}', ModelName - '{}', Description - '{}'",
            self.program_slot,
            self.cip_id,
            self.ip_address,
            self.port,
            self.room_id,
            self.device_id,
            self.entry_type,
            self.status,
            self.model_name,
            self.description
        )
    }
}
