//! The IP table manager: command construction, response handling, lookups.

use crate::console::ConsoleTransport;
use crate::error::IpTableError;
use crate::Result;
use iptable_protocol::{
    classify_response, parse_table_response, Command, IpTable, IpTableEntry, ResponseKind,
    MAX_PROGRAM_SLOT, RESPONSE_MASTER_LIST_SET, RESPONSE_REMOVE_FAILED,
};
use tracing::{debug, warn};

/// Manages the IP table of a control processor over its console channel.
///
/// Each operation issues exactly one console round-trip and fully consumes
/// the response before returning. Invalid arguments are rejected with
/// [`IpTableError`] before any command is sent; everything the processor
/// itself refuses comes back as `Ok(false)`.
#[derive(Debug)]
pub struct IpTableManager<C> {
    console: C,
}

impl<C: ConsoleTransport> IpTableManager<C> {
    /// Create a manager over the given console transport.
    pub fn new(console: C) -> Self {
        IpTableManager { console }
    }

    /// Consume the manager and hand back the transport.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Load the IP table for `program_slot` into `table`, replacing its
    /// contents.
    ///
    /// Slot 0 loads the entries of every slot; 1-10 a specific one; any
    /// other slot is rejected. Returns `Ok(true)` as soon as the response
    /// carries tabular data, even when no row survives parsing. When the
    /// console reports an error the table keeps its previous contents and
    /// the call returns `Ok(false)`; unrelated response text returns
    /// `Ok(false)` without logging.
    pub fn load_table(&mut self, program_slot: u16, table: &mut IpTable) -> Result<bool> {
        if !is_valid_program_slot(program_slot) {
            return Err(IpTableError::InvalidSlot(program_slot));
        }

        let command = Command::ListTable { slot: program_slot };
        let response = self.console.send_command(&command.to_command_string());

        match classify_response(&response) {
            ResponseKind::CommandError => {
                warn!("no IP table loaded for slot {}", program_slot);
                Ok(false)
            }
            ResponseKind::Table => {
                let rows = parse_table_response(&response, program_slot, table);
                debug!("loaded {} IP table entries for slot {}", rows, program_slot);
                Ok(true)
            }
            ResponseKind::Unrecognized => Ok(false),
        }
    }

    /// Register a peer in the IP table of the given program slot.
    ///
    /// Returns `Ok(true)` when the processor confirms the mutation.
    pub fn add_entry(&mut self, program_slot: u16, cip_id: u16, ip_address: &str) -> Result<bool> {
        validate_peer(program_slot, cip_id, ip_address)?;

        let command = Command::AddPeer {
            cip_id,
            ip_address: ip_address.to_string(),
            device_id: None,
            slot: program_slot,
        };
        Ok(self.mutation_accepted(&command))
    }

    /// Register a peer, remapping the programmed `device_id` onto `cip_id`.
    ///
    /// The remap lets a runtime entry stand in for a CIP ID that was set up
    /// statically in the control program.
    pub fn add_entry_with_remap(
        &mut self,
        program_slot: u16,
        cip_id: u16,
        ip_address: &str,
        device_id: u16,
    ) -> Result<bool> {
        validate_peer(program_slot, cip_id, ip_address)?;
        if device_id == 0 {
            return Err(IpTableError::InvalidDeviceId);
        }

        let command = Command::AddPeer {
            cip_id,
            ip_address: ip_address.to_string(),
            device_id: Some(device_id),
            slot: program_slot,
        };
        Ok(self.mutation_accepted(&command))
    }

    /// Remove a peer from the IP table of the given program slot.
    ///
    /// Returns `Ok(true)` when the processor confirms the mutation. A
    /// processor refusal is logged and reported as `Ok(false)`.
    pub fn remove_entry(
        &mut self,
        program_slot: u16,
        cip_id: u16,
        ip_address: &str,
    ) -> Result<bool> {
        validate_peer(program_slot, cip_id, ip_address)?;

        let command = Command::RemovePeer {
            cip_id,
            ip_address: ip_address.to_string(),
            slot: program_slot,
        };
        let response = self.console.send_command(&command.to_command_string());
        let lowered = response.to_lowercase();

        if lowered.contains(RESPONSE_MASTER_LIST_SET) {
            Ok(true)
        } else {
            if lowered.contains(RESPONSE_REMOVE_FAILED) {
                warn!("could not remove IP table entry {:X} - {}", cip_id, ip_address);
            }
            Ok(false)
        }
    }

    /// Check whether an entry with `cip_id` exists in `program_slot`,
    /// querying the processor first.
    ///
    /// On a match the entry's fields are copied into `found`. Callers that
    /// already hold a current table should use
    /// [`entry_exists_in`](Self::entry_exists_in) and skip the round-trip.
    pub fn entry_exists(
        &mut self,
        program_slot: u16,
        cip_id: u16,
        found: &mut IpTableEntry,
    ) -> Result<bool> {
        let mut table = IpTable::new(program_slot);
        if !self.load_table(program_slot, &mut table)? {
            return Ok(false);
        }
        Ok(self.entry_exists_in(&table, cip_id, found))
    }

    /// Search an already-loaded table for `cip_id`, without console traffic.
    ///
    /// The search is linear and first-match-wins over the entry sequence,
    /// so duplicates resolve to the earliest appended entry. On a match the
    /// entry is copied field by field into `found` (never aliased to the
    /// table's own entry) and the search stops.
    pub fn entry_exists_in(
        &self,
        table: &IpTable,
        cip_id: u16,
        found: &mut IpTableEntry,
    ) -> bool {
        if table.is_empty() {
            debug!("IP table for slot {} is empty", table.slot());
            return false;
        }

        match table.find_by_cip_id(cip_id) {
            Some(entry) => {
                found.clone_from(entry);
                true
            }
            None => false,
        }
    }

    /// Load the entry registered under `cip_id` in `program_slot` into
    /// `entry`.
    ///
    /// Convenience wrapper over [`entry_exists`](Self::entry_exists).
    pub fn load_entry(
        &mut self,
        program_slot: u16,
        cip_id: u16,
        entry: &mut IpTableEntry,
    ) -> Result<bool> {
        self.entry_exists(program_slot, cip_id, entry)
    }

    /// Send a mutation and check the response for the acceptance marker.
    fn mutation_accepted(&mut self, command: &Command) -> bool {
        let response = self.console.send_command(&command.to_command_string());
        response.to_lowercase().contains(RESPONSE_MASTER_LIST_SET)
    }
}

/// Slot range check for mutations. The lower bound is implicit in `u16`, so
/// slot 0, the currently running program, always passes.
fn is_valid_program_slot(program_slot: u16) -> bool {
    program_slot <= MAX_PROGRAM_SLOT
}

/// Validate the peer arguments shared by every mutation.
fn validate_peer(program_slot: u16, cip_id: u16, ip_address: &str) -> Result<()> {
    if !is_valid_program_slot(program_slot) {
        return Err(IpTableError::InvalidSlot(program_slot));
    }
    if cip_id == 0 {
        return Err(IpTableError::InvalidCipId);
    }
    if ip_address.trim().is_empty() {
        return Err(IpTableError::InvalidIpAddress);
    }
    Ok(())
}
