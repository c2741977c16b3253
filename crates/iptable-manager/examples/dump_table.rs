//! Example: load an IP table through a scripted console and print it.
//!
//! The real transport would bridge `send_command` to the processor console;
//! here a canned response stands in so the example runs anywhere.
//!
//! Usage: cargo run --example dump_table

use iptable_manager::{IpTable, IpTableEntry, IpTableManager};

const CANNED_RESPONSE: &str = "\
CrestronConsole Release
TableStart:
CIP_ID  |Type |Status  |DevID |Port  |IP Address/SiteName |Model Name |Description |RoomId
------------------------------------------------------------------------------------------
1A      |Peer |ONLINE  |0     |41794 |10.0.0.5            |TSW-770    |Lobby panel |
03      |Peer |OFFLINE |1F    |41794 |conf-room.local     |DMPS3-300  |Conf room   |Room7
";

fn main() {
    tracing_subscriber::fmt::init();

    let console = |command: &str| {
        println!("> {}", command);
        CANNED_RESPONSE.to_string()
    };

    let mut manager = IpTableManager::new(console);
    let mut table = IpTable::new(1);

    match manager.load_table(1, &mut table) {
        Ok(true) => print!("{}", table),
        Ok(false) => eprintln!("processor returned no table"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    let mut entry = IpTableEntry::new();
    if manager.entry_exists_in(&table, 0x03, &mut entry) {
        println!("\nCIP_ID 03 resolves to {}:{}", entry.ip_address, entry.port);
    }
}
