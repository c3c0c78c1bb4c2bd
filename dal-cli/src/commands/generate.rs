//! Generate a Go DAL file from a `CREATE TABLE` statement

use crate::commands::input::SqlInput;
use crate::config::ToolConfig;
use anyhow::{Context, Result};
use clap::Args;
use dal_schema::codegen::CodeGenerator;
use dal_schema::{GoDalGenerator, TableDefinition, TableValidator};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Looser than the extractor's pattern: the table name may be unquoted
static FILE_TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)CREATE\s+TABLE\s+([a-zA-Z0-9_]+)\.\s*`?([a-zA-Z0-9_]+)`?")
        .expect("generate: Invalid file name regex")
});

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: SqlInput,

    /// Print the generated code instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateCommand {
    pub async fn execute(self, workspace: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
        let Some(sql) = self.input.read_sql().await? else {
            log::warn!("Empty SQL input, nothing generated");
            println!("⚠️  No SQL statement provided.");
            return Ok(());
        };

        let Some(workspace) = resolve_workspace(workspace)? else {
            println!("⚠️  No workspace folder found.");
            return Ok(());
        };
        log::debug!("Workspace: {}", workspace.display());

        let config = ToolConfig::load(&workspace, config.as_deref())?;
        let generator = GoDalGenerator::with_options(config.generator_options())?;

        let table = TableDefinition::from_sql(&sql);
        let validation = TableValidator::validate(&table);
        for warning in &validation.warnings {
            log::warn!("{}", warning);
        }

        let code = generator.generate_table(&table)?;

        if self.stdout {
            print!("{}", code);
            return Ok(());
        }

        let file_name = derive_file_name(&sql, &config.output.default_file_name);
        let path = write_output(&config.output_dir(&workspace), &file_name, &code).await?;

        println!("✅ Generated Go DAL code saved as {}.", file_name);
        println!("📁 {}", path.display());
        Ok(())
    }
}

/// File name for the generated code: `<table>.go` when the statement names a
/// schema-qualified table, else `default`.
pub fn derive_file_name(sql: &str, default: &str) -> String {
    FILE_TABLE_NAME
        .captures(sql)
        .and_then(|caps| caps.get(2))
        .map(|m| format!("{}.go", m.as_str()))
        .unwrap_or_else(|| default.to_string())
}

/// Explicit workspace if given, else the current directory. `None` when the
/// folder does not exist.
pub fn resolve_workspace(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let workspace = match explicit {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    if workspace.is_dir() {
        Ok(Some(workspace))
    } else {
        log::debug!("Workspace {} is not a directory", workspace.display());
        Ok(None)
    }
}

/// Write `code` verbatim to `dir/file_name`, creating `dir` and replacing any
/// existing file.
pub async fn write_output(dir: &Path, file_name: &str, code: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;

    let path = dir.join(file_name);
    fs::write(&path, code.as_bytes())
        .await
        .with_context(|| format!("Failed to write '{}'", path.display()))?;

    log::info!("Wrote {} bytes to {}", code.len(), path.display());
    Ok(path)
}
