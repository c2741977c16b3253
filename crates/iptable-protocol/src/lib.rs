//! Crestron console IP Table protocol
//!
//! This crate provides types and utilities for working with the IP Table
//! commands of a Crestron control processor's console interface. The console
//! is a simple line-oriented text channel: a command string goes in, a
//! free-text response comes back.
//!
//! # Protocol Overview
//!
//! - **Commands** (client → processor): plain text, e.g. `iptable -t -p:1`
//!   or `addpeer 1A 10.0.0.5 -p:3`
//! - **Responses** (processor → client): free text; success and failure are
//!   signalled by well-known marker substrings, matched case-insensitively
//! - **Tabular data**: an `iptable -t` query answers with a pipe-delimited
//!   table introduced by a `TableStart:` marker:
//!
//! ```text
//! TableStart:
//! CIP_ID  |Type    |Status    |DevID   |Port   |IP Address/SiteName   |Model Name |Description |RoomId
//! ---------------------------------------------------------------------------------------------------
//! 1A      |Peer    |ONLINE    |0       |41794  |10.0.0.5              |TSW-770    |Touch panel |
//! ```
//!
//! Parsing is deliberately tolerant: unparsable numeric fields become 0,
//! rows with the wrong column count are skipped, and stray console chatter
//! between rows is ignored.
//!
//! # Example
//!
//! ```rust
//! use iptable_protocol::{classify_response, Command, ResponseKind};
//!
//! // Build a command
//! let cmd = Command::ListTable { slot: 1 };
//! assert_eq!(cmd.to_command_string(), "iptable -t -p:1");
//!
//! // Classify a response
//! let kind = classify_response("Bad or Incomplete Command");
//! assert_eq!(kind, ResponseKind::CommandError);
//! ```

mod commands;
mod constants;
mod entry;
mod responses;
mod table;

pub use commands::*;
pub use constants::*;
pub use entry::*;
pub use responses::*;
pub use table::*;
