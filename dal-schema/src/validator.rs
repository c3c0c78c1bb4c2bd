//! Diagnostics for extracted tables
//!
//! The generator accepts every input. The validator reports what it accepted
//! silently so the caller can warn the user before writing a file.

use crate::types::is_fallback_type;
use crate::{TableDefinition, ValidationResult, UNKNOWN_TABLE};
use std::collections::HashSet;

/// Table validator
pub struct TableValidator;

impl TableValidator {
    /// Collect all warnings for an extracted table
    pub fn validate(table: &TableDefinition) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.merge(Self::check_table_name(table));
        result.merge(Self::check_columns(table));

        result
    }

    fn check_table_name(table: &TableDefinition) -> ValidationResult {
        let mut result = ValidationResult::new();

        if table.is_unknown() {
            result.add_warning(format!(
                "No CREATE TABLE <schema>.`<name>` clause found, using '{}'",
                UNKNOWN_TABLE
            ));
        }

        result
    }

    fn check_columns(table: &TableDefinition) -> ValidationResult {
        let mut result = ValidationResult::new();

        if table.columns.is_empty() {
            result.add_warning(format!(
                "Table '{}' has no columns with a COMMENT clause, struct will be empty",
                table.name
            ));
            return result;
        }

        let mut seen = HashSet::new();
        for column in &table.columns {
            if !seen.insert(column.name.as_str()) {
                result.add_warning(format!(
                    "Duplicate column '{}' in table '{}', the struct will repeat the field",
                    column.name, table.name
                ));
            }

            if is_fallback_type(&column.sql_type) {
                result.add_warning(format!(
                    "Column '{}' has unmapped type '{}', using {}",
                    column.name,
                    column.sql_type,
                    column.go_type()
                ));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnInfo;

    #[test]
    fn test_clean_table_has_no_warnings() {
        let table = TableDefinition {
            name: "users".to_string(),
            columns: vec![
                ColumnInfo::new("id", "bigint", "ID"),
                ColumnInfo::new("name", "varchar(64)", "Name"),
            ],
        };

        assert!(!TableValidator::validate(&table).has_warnings());
    }

    #[test]
    fn test_duplicate_reported_once_per_repeat() {
        let table = TableDefinition {
            name: "users".to_string(),
            columns: vec![
                ColumnInfo::new("id", "bigint", "ID"),
                ColumnInfo::new("id", "bigint", "ID again"),
            ],
        };

        let result = TableValidator::validate(&table);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Duplicate column 'id'"));
    }
}
