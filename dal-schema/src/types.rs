//! Extracted table types and the SQL to Go type mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table name used when the statement has no recognisable `CREATE TABLE` clause
pub const UNKNOWN_TABLE: &str = "UnknownTable";

/// One documented column of a `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name as written between backticks
    pub name: String,

    /// First contiguous type token (`varchar(255)`, `bigint`, `decimal(10,2)`)
    #[serde(rename = "type")]
    pub sql_type: String,

    /// Text of the `COMMENT '...'` clause
    pub comment: String,
}

impl ColumnInfo {
    pub fn new(
        name: impl Into<String>,
        sql_type: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            comment: comment.into(),
        }
    }

    /// Go type this column maps to
    pub fn go_type(&self) -> GoType {
        sql_type_to_go_type(&self.sql_type)
    }
}

/// Table name plus columns, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableDefinition {
    /// Run both extraction passes over `sql`
    pub fn from_sql(sql: &str) -> Self {
        Self {
            name: crate::parser::extract_table_name(sql),
            columns: crate::parser::parse_columns(sql),
        }
    }

    /// Whether the table name fell back to [`UNKNOWN_TABLE`]
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_TABLE
    }
}

/// Go types the generator can emit for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoType {
    #[serde(rename = "uint32")]
    Uint32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "time.Time")]
    Time,
}

impl GoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoType::Uint32 => "uint32",
            GoType::Int64 => "int64",
            GoType::String => "string",
            GoType::Time => "time.Time",
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw MySQL type token to a Go type.
///
/// Rules are case-insensitive substring checks applied in priority order.
/// `tinyint(1)` is a flag column and stays unsigned; every other integer
/// flavour, `bigint` included, becomes `int64`. Anything unrecognised
/// (`decimal`, `float`, `json`, ...) falls back to `string`.
pub fn sql_type_to_go_type(sql_type: &str) -> GoType {
    let t = sql_type.to_lowercase();

    if t.contains("tinyint(1)") {
        GoType::Uint32
    } else if t.contains("int") {
        GoType::Int64
    } else if t.contains("varchar") || t.contains("text") {
        GoType::String
    } else if t.contains("datetime") || t.contains("timestamp") {
        GoType::Time
    } else {
        GoType::String
    }
}

/// Whether `sql_type` reached `string` only through the fallback rule
pub fn is_fallback_type(sql_type: &str) -> bool {
    let t = sql_type.to_lowercase();
    sql_type_to_go_type(sql_type) == GoType::String
        && !t.contains("varchar")
        && !t.contains("text")
}
