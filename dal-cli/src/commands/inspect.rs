//! Show what the generator extracts from a statement without writing files

use crate::commands::input::SqlInput;
use anyhow::Result;
use clap::{Args, ValueEnum};
use dal_schema::codegen::to_pascal_case;
use dal_schema::{GoType, TableDefinition, TableValidator};
use serde::Serialize;

/// Output format for inspection results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub input: SqlInput,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Extracted table with the names and types the generator will emit
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub table: String,
    pub struct_name: String,
    pub columns: Vec<InspectColumn>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectColumn {
    pub name: String,
    pub field: String,
    pub sql_type: String,
    pub go_type: GoType,
    pub comment: String,
}

impl InspectReport {
    pub fn from_sql(sql: &str) -> Self {
        let table = TableDefinition::from_sql(sql);
        let warnings = TableValidator::validate(&table).warnings;

        let columns = table
            .columns
            .iter()
            .map(|column| InspectColumn {
                name: column.name.clone(),
                field: to_pascal_case(&column.name),
                sql_type: column.sql_type.clone(),
                go_type: column.go_type(),
                comment: column.comment.clone(),
            })
            .collect();

        Self {
            struct_name: to_pascal_case(&table.name),
            table: table.name,
            columns,
            warnings,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
            OutputFormat::Table => self.to_table(),
        })
    }

    fn to_table(&self) -> String {
        let mut out = format!("📋 Table: {} (struct {})\n", self.table, self.struct_name);

        if self.columns.is_empty() {
            out.push_str("   No documented columns\n");
        } else {
            out.push_str("   Fields:\n");
            for column in &self.columns {
                out.push_str(&format!(
                    "     • {} {} <- {} {}\n",
                    column.field, column.go_type, column.name, column.sql_type
                ));
                out.push_str(&format!("       💡 {}\n", column.comment));
            }
        }

        for warning in &self.warnings {
            out.push_str(&format!("⚠️  {}\n", warning));
        }

        out
    }
}

impl InspectCommand {
    pub async fn execute(self) -> Result<()> {
        let Some(sql) = self.input.read_sql().await? else {
            println!("⚠️  No SQL statement provided.");
            return Ok(());
        };

        let report = InspectReport::from_sql(&sql);
        print!("{}", report.render(self.format)?);
        if self.format != OutputFormat::Table {
            println!();
        }
        Ok(())
    }
}
