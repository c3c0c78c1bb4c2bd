//! `CREATE TABLE` extraction
//!
//! Two independent regex scans over the raw statement: one for the
//! schema-qualified, backtick-quoted table name and one for every column
//! that carries a `COMMENT '...'` clause. Nothing else in the statement is
//! interpreted.

use crate::types::{ColumnInfo, UNKNOWN_TABLE};
use once_cell::sync::Lazy;
use regex::Regex;

/// `CREATE TABLE <schema>.`<name>``, keyword match is case-insensitive
static TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)CREATE TABLE\s+\S+\.`([A-Za-z0-9_]+)`")
        .expect("parser: Invalid table name regex")
});

/// `` `<col>` <type> ... COMMENT '<text>' ``
///
/// The type token is a word optionally followed by one numeric argument list,
/// so `decimal(10,2)` stays whole while quoted `enum`/`set` members leave a
/// comma before the comment and the column is skipped. Between the type and
/// the comment no comma may appear.
static DOCUMENTED_COLUMN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"`([A-Za-z0-9_]+)`\s+([A-Za-z][A-Za-z0-9_]*(?:\([0-9,\s]*\))?)[^,]*COMMENT\s+'([^']+)'",
    )
    .expect("parser: Invalid column regex")
});

/// Extract the table name, or [`UNKNOWN_TABLE`] when the statement does not
/// match `CREATE TABLE <schema>.`<name>``.
pub fn extract_table_name(sql: &str) -> String {
    TABLE_NAME
        .captures(sql)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_TABLE.to_string())
}

/// Extract every documented column in source order.
///
/// Columns without a `COMMENT` clause are skipped, as are key, index and
/// table-option clauses. Duplicate names are returned as they appear.
pub fn parse_columns(sql: &str) -> Vec<ColumnInfo> {
    DOCUMENTED_COLUMN
        .captures_iter(sql)
        .map(|caps| ColumnInfo::new(&caps[1], &caps[2], &caps[3]))
        .collect()
}
