//! Commands that can be sent to the processor console.
//!
//! Commands render to the exact text the console expects via
//! [`Command::to_command_string`]. Rendering is mechanical; range checks on
//! slots and IDs are the caller's responsibility.

use crate::constants::{COMMAND_ADD_PEER, COMMAND_LIST_IPTABLE_TABULAR, COMMAND_REMOVE_PEER};

/// Commands understood by the IP Table console interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the IP table in tabular form.
    ListTable {
        /// Program slot to list; 0 lists the entries of every slot.
        slot: u16,
    },

    /// Register a peer in the runtime IP table.
    AddPeer {
        /// CIP ID to register the peer under (rendered in hex).
        cip_id: u16,
        /// IP address or hostname of the peer.
        ip_address: String,
        /// Programmed CIP ID to remap onto `cip_id`, if any (rendered in hex).
        device_id: Option<u16>,
        /// Target program slot; 0 targets the currently running program.
        slot: u16,
    },

    /// Remove a peer from the runtime IP table.
    RemovePeer {
        /// CIP ID of the entry to remove (rendered in hex).
        cip_id: u16,
        /// IP address or hostname of the entry to remove.
        ip_address: String,
        /// Target program slot; 0 targets the currently running program.
        slot: u16,
    },

    /// Send a raw command string.
    Raw {
        /// The raw command text.
        command: String,
    },
}

impl Command {
    /// Render the command exactly as the console expects it.
    pub fn to_command_string(&self) -> String {
        match self {
            Command::ListTable { slot: 0 } => COMMAND_LIST_IPTABLE_TABULAR.to_string(),
            Command::ListTable { slot } => {
                format!("{} -p:{}", COMMAND_LIST_IPTABLE_TABULAR, slot)
            }

            Command::AddPeer { cip_id, ip_address, device_id, slot } => {
                let mut command = format!("{} {:X} {}", COMMAND_ADD_PEER, cip_id, ip_address);
                if let Some(device_id) = device_id {
                    command.push_str(&format!(" -D:{:X}", device_id));
                }
                if *slot != 0 {
                    command.push_str(&format!(" -p:{}", slot));
                }
                command
            }

            Command::RemovePeer { cip_id, ip_address, slot } => {
                let mut command = format!("{} {:X} {}", COMMAND_REMOVE_PEER, cip_id, ip_address);
                if *slot != 0 {
                    command.push_str(&format!(" -p:{}", slot));
                }
                command
            }

            Command::Raw { command } => command.clone(),
        }
    }
}
