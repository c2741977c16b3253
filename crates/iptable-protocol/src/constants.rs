//! Protocol constants
//!
//! Command verbs, response markers, and limits for the processor console's
//! IP Table interface. Response markers are matched case-insensitively
//! against whatever text the console returns.

// ============================================================================
// Console commands (client → processor)
// ============================================================================

/// List the IP table in its default free-form layout.
pub const COMMAND_LIST_IPTABLE: &str = "iptable";
/// List the IP table in tabular, pipe-delimited layout.
pub const COMMAND_LIST_IPTABLE_TABULAR: &str = "iptable -t";
/// Register a peer in the runtime IP table.
pub const COMMAND_ADD_PEER: &str = "addpeer";
/// Remove a peer from the runtime IP table.
pub const COMMAND_REMOVE_PEER: &str = "rempeer";

// ============================================================================
// Response markers (processor → client)
// ============================================================================

/// The console did not understand the command.
pub const RESPONSE_MSG_ERROR: &str = "bad or incomplete command";
/// Tabular IP table data follows this marker.
pub const RESPONSE_TABLE_START: &str = "tablestart:";
/// The processor accepted a peer mutation.
pub const RESPONSE_MASTER_LIST_SET: &str = "master list set";
/// The processor refused to remove an entry.
pub const RESPONSE_REMOVE_FAILED: &str = "unable to remove ip table entry";

// ============================================================================
// Tabular layout
// ============================================================================

/// First token of the tabular header line.
pub const TABLE_HEADER_PREFIX: &str = "CIP_ID";
/// Number of pipe-delimited fields in a data row.
pub const TABLE_COLUMN_COUNT: usize = 9;

// ============================================================================
// Limits
// ============================================================================

/// Highest program slot a processor exposes.
pub const MAX_PROGRAM_SLOT: u16 = 10;
