//! # iptable-manager
//!
//! Configuration management for the IP table of a Crestron control
//! processor, over its console channel.
//!
//! The processor console is an opaque synchronous call: a command string
//! goes in, a free-text response comes back, and failures surface only as
//! message content. This crate supplies the [`ConsoleTransport`] seam for
//! that call and an [`IpTableManager`] that drives it: loading the IP table
//! for a program slot into an [`IpTable`], registering and removing peers,
//! and looking entries up by CIP ID.
//!
//! Every operation is a single command/response round-trip. The manager
//! keeps no table state of its own: query results land in the caller's
//! table, and concurrent callers must supply distinct tables or serialize
//! access themselves.
//!
//! # Example
//!
//! ```rust
//! use iptable_manager::IpTableManager;
//!
//! // Any FnMut(&str) -> String works as a console; bridge to the real
//! // processor console here.
//! let console = |_command: &str| "Master List Set".to_string();
//!
//! let mut manager = IpTableManager::new(console);
//! let added = manager.add_entry(3, 0x1A, "10.0.0.5")?;
//! assert!(added);
//! # Ok::<(), iptable_manager::IpTableError>(())
//! ```

mod console;
mod error;
mod manager;

pub use console::ConsoleTransport;
pub use error::IpTableError;
pub use manager::IpTableManager;

// The data model the manager populates, re-exported for convenience.
pub use iptable_protocol::{IpTable, IpTableEntry};

/// Result type for IP table operations.
pub type Result<T> = std::result::Result<T, IpTableError>;
