//! Response classification and tabular parsing.
//!
//! A query response worth parsing looks like this (banner lines and console
//! chatter may precede the marker):
//!
//! ```text
//! TableStart:
//! CIP_ID  |Type    |Status    |DevID   |Port   |IP Address/SiteName   |Model Name |Description |RoomId
//! ---------------------------------------------------------------------------------------------------
//! 1A      |Peer    |ONLINE    |0       |41794  |10.0.0.5              |TSW-770    |Touch panel |
//! ```
//!
//! Lines are classified by shape: a line starting with `CIP_ID` is the
//! header, a line starting with `-` is the separator, a line containing `|`
//! is a data row, and everything else is ignored.

use crate::constants::{
    RESPONSE_MSG_ERROR, RESPONSE_TABLE_START, TABLE_COLUMN_COUNT, TABLE_HEADER_PREFIX,
};
use crate::entry::IpTableEntry;
use crate::table::IpTable;
use tracing::{debug, warn};

/// Coarse classification of a console response to an IP table query.
///
/// The variants are checked in declaration order: an error marker wins even
/// when the same response also carries the table-start marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Empty response, or one carrying the console's error marker.
    CommandError,
    /// Response carrying the table-start marker; tabular data follows.
    Table,
    /// Unrelated console text.
    Unrecognized,
}

/// Classify a console response ahead of parsing.
pub fn classify_response(response: &str) -> ResponseKind {
    let lowered = response.to_lowercase();
    if response.is_empty() || lowered.contains(RESPONSE_MSG_ERROR) {
        ResponseKind::CommandError
    } else if lowered.contains(RESPONSE_TABLE_START) {
        ResponseKind::Table
    } else {
        ResponseKind::Unrecognized
    }
}

/// Parse a tabular query response into `table`, replacing its contents.
///
/// The table is cleared and stamped with the queried `slot` before any line
/// is read; every parsed entry carries that slot as well, regardless of what
/// the row says. Returns the number of data rows appended.
///
/// Parsing is tolerant end to end: numeric fields that fail to parse become
/// 0, rows that do not split into exactly [`TABLE_COLUMN_COUNT`] fields are
/// skipped, and unrecognized lines are ignored. The header and separator
/// snapshot kept on the table reflects the most recent header/separator line
/// seen before the last appended row, so a table with no rows keeps them
/// empty.
pub fn parse_table_response(response: &str, slot: u16, table: &mut IpTable) -> usize {
    table.clear();
    table.set_slot(slot);

    let lines: Vec<&str> = response.trim().split('\n').collect();

    // A tabular response is at least a header and a separator line.
    if lines.len() < 2 {
        warn!("invalid response loading IP table: '{}'", response.trim());
        return 0;
    }

    debug!("walking {} IP table lines for slot {}", lines.len(), slot);

    let mut header = String::new();
    let mut separator = String::new();
    let mut appended = 0;

    for line in lines {
        let row = line.trim();

        if row.starts_with(TABLE_HEADER_PREFIX) {
            header = row.to_string();
        } else if row.starts_with('-') {
            separator = row.to_string();
        } else if row.contains('|') {
            let fields: Vec<&str> = row.split('|').collect();
            if fields.len() == TABLE_COLUMN_COUNT {
                let entry = IpTableEntry {
                    cip_id: parse_u16_hex(fields[0]),
                    entry_type: fields[1].trim().to_string(),
                    status: fields[2].trim().to_string(),
                    device_id: parse_u16_hex(fields[3]),
                    port: parse_u16(fields[4]),
                    ip_address: fields[5].trim().to_string(),
                    model_name: fields[6].trim().to_string(),
                    description: fields[7].trim().to_string(),
                    room_id: fields[8].trim().to_string(),
                    // the row's slot column does not exist; the queried slot wins
                    program_slot: slot,
                };

                table.push_row(entry, row.to_string());
                table.set_raw_header(header.clone());
                table.set_raw_separator(separator.clone());
                appended += 1;
            }
        }
        // Anything else is banner text or blank padding; skip it.
    }

    appended
}

/// Parse hexadecimal text as a `u16`, yielding 0 on any failure.
pub fn parse_u16_hex(text: &str) -> u16 {
    u16::from_str_radix(text.trim(), 16).unwrap_or(0)
}

/// Parse decimal text as a `u16`, yielding 0 on any failure.
pub fn parse_u16(text: &str) -> u16 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABULAR_RESPONSE: &str = "\
CrestronConsole Release
TableStart:
CIP_ID  |Type    |Status    |DevID   |Port   |IP Address/SiteName   |Model Name |Description |RoomId
----------------------------------------------------------------------------------------------------
1A      |Peer    |ONLINE    |0       |41794  |10.0.0.5              |TSW-770    |Touch panel |
03      |Peer    |OFFLINE   |1F      |41794  |10.0.0.6              |           |            |Room7
";

    #[test]
    fn test_classify_error_marker_any_case() {
        assert_eq!(classify_response("Bad or Incomplete Command"), ResponseKind::CommandError);
        assert_eq!(classify_response("BAD OR INCOMPLETE COMMAND"), ResponseKind::CommandError);
        assert_eq!(classify_response(""), ResponseKind::CommandError);
    }

    #[test]
    fn test_classify_error_marker_wins_over_table_marker() {
        let response = "TableStart:\nbad or incomplete command";
        assert_eq!(classify_response(response), ResponseKind::CommandError);
    }

    #[test]
    fn test_classify_table_and_unrecognized() {
        assert_eq!(classify_response(TABULAR_RESPONSE), ResponseKind::Table);
        assert_eq!(classify_response("tablestart: nothing else"), ResponseKind::Table);
        assert_eq!(classify_response("some console banner"), ResponseKind::Unrecognized);
    }

    #[test]
    fn test_parse_full_response() {
        let mut table = IpTable::new(0);
        let appended = parse_table_response(TABULAR_RESPONSE, 4, &mut table);

        assert_eq!(appended, 2);
        assert_eq!(table.slot(), 4);
        assert_eq!(table.count(), 2);
        assert_eq!(table.raw_rows().len(), 2);

        let first = &table.entries()[0];
        assert_eq!(first.cip_id, 0x1A);
        assert_eq!(first.entry_type, "Peer");
        assert_eq!(first.status, "ONLINE");
        assert_eq!(first.device_id, 0);
        assert_eq!(first.port, 41794);
        assert_eq!(first.ip_address, "10.0.0.5");
        assert_eq!(first.model_name, "TSW-770");
        assert_eq!(first.description, "Touch panel");
        assert_eq!(first.room_id, "");
        assert_eq!(first.program_slot, 4);

        let second = &table.entries()[1];
        assert_eq!(second.cip_id, 0x03);
        assert_eq!(second.device_id, 0x1F);
        assert_eq!(second.room_id, "Room7");
        assert_eq!(second.program_slot, 4);

        assert!(table.raw_header().starts_with("CIP_ID"));
        assert!(table.raw_separator().starts_with('-'));
        assert!(table.raw_rows()[0].starts_with("1A"));
    }

    #[test]
    fn test_parse_replaces_previous_contents() {
        let mut table = IpTable::new(0);
        parse_table_response(TABULAR_RESPONSE, 4, &mut table);
        parse_table_response("TableStart:\nCIP_ID |header only line\n-----", 2, &mut table);

        assert_eq!(table.slot(), 2);
        assert_eq!(table.count(), 0);
        assert!(table.raw_rows().is_empty());
    }

    #[test]
    fn test_zero_rows_leaves_header_snapshot_empty() {
        // Header and separator are only snapshotted once a row is appended.
        let response = "TableStart:\n\
                        CIP_ID  |Type |Status |DevID |Port |IP Address/SiteName |Model Name |Description |RoomId\n\
                        -----------------------------------------------------";
        let mut table = IpTable::new(0);
        let appended = parse_table_response(response, 1, &mut table);

        assert_eq!(appended, 0);
        assert!(table.is_empty());
        assert_eq!(table.raw_header(), "");
        assert_eq!(table.raw_separator(), "");
    }

    #[test]
    fn test_wrong_column_count_skips_row() {
        let eight = "TableStart:\npad\n1A |Peer |ONLINE |0 |41794 |10.0.0.5 |TSW-770 |desc";
        let ten = "TableStart:\npad\n1A |Peer |ONLINE |0 |41794 |10.0.0.5 |TSW-770 |desc | |extra";
        for response in [eight, ten] {
            let mut table = IpTable::new(0);
            assert_eq!(parse_table_response(response, 1, &mut table), 0);
            assert!(table.is_empty());
        }
    }

    #[test]
    fn test_unparsable_field_defaults_to_zero_but_row_survives() {
        let response = "TableStart:\npad\nZZ |Peer |ONLINE |XY |badport |10.0.0.5 |m |d |r";
        let mut table = IpTable::new(0);
        assert_eq!(parse_table_response(response, 1, &mut table), 1);

        let entry = &table.entries()[0];
        assert_eq!(entry.cip_id, 0);
        assert_eq!(entry.device_id, 0);
        assert_eq!(entry.port, 0);
        assert_eq!(entry.ip_address, "10.0.0.5");
    }

    #[test]
    fn test_short_response_is_skipped() {
        let mut table = IpTable::new(0);
        assert_eq!(parse_table_response("TableStart:", 3, &mut table), 0);
        assert_eq!(table.slot(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_latest_header_and_separator_win() {
        let response = "TableStart:\n\
                        CIP_ID old header |x\n\
                        ---old---\n\
                        CIP_ID new header |x\n\
                        ---new---\n\
                        1A |Peer |ONLINE |0 |41794 |10.0.0.5 |m |d |r";
        let mut table = IpTable::new(0);
        assert_eq!(parse_table_response(response, 1, &mut table), 1);
        assert_eq!(table.raw_header(), "CIP_ID new header |x");
        assert_eq!(table.raw_separator(), "---new---");
    }

    #[test]
    fn test_parse_u16_helpers_are_tolerant() {
        assert_eq!(parse_u16_hex("1A"), 26);
        assert_eq!(parse_u16_hex("  1A  "), 26);
        assert_eq!(parse_u16_hex("ZZ"), 0);
        assert_eq!(parse_u16_hex(""), 0);
        assert_eq!(parse_u16("41794"), 41794);
        assert_eq!(parse_u16("-5"), 0);
        assert_eq!(parse_u16("70000"), 0);
        assert_eq!(parse_u16("port"), 0);
    }
}
