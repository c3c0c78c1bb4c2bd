//! SQL input acquisition shared by the generate and inspect commands

use anyhow::{Context, Result};
use clap::Args;
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

pub const PROMPT: &str = "Enter SQL statement to create MySQL table";

/// Where the `CREATE TABLE` statement comes from
#[derive(Debug, Clone, Args)]
pub struct SqlInput {
    /// SQL statement given inline
    #[arg(long, conflicts_with = "input")]
    pub sql: Option<String>,

    /// Read the SQL statement from a file
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl SqlInput {
    /// Acquire the statement, prompting on stdin when neither `--sql` nor
    /// `--input` is given. Returns `None` for blank input.
    pub async fn read_sql(&self) -> Result<Option<String>> {
        let sql = if let Some(sql) = &self.sql {
            sql.clone()
        } else if let Some(path) = &self.input {
            log::debug!("Reading SQL from {}", path.display());
            fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read SQL file '{}'", path.display()))?
        } else {
            let interactive = std::io::stdin().is_terminal();
            if interactive {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(format!("{}:\n", PROMPT).as_bytes()).await?;
                stdout.flush().await?;
            }
            read_statement(BufReader::new(tokio::io::stdin()), interactive).await?
        };

        Ok(non_blank(sql))
    }
}

/// Read lines until one ends with `;` or the stream ends.
///
/// In interactive mode a blank first line ends the prompt so the user can
/// cancel by pressing enter.
pub async fn read_statement<R>(reader: R, interactive: bool) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut statement: Vec<String> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        if interactive && statement.is_empty() && line.trim().is_empty() {
            break;
        }

        let done = line.trim_end().ends_with(';');
        statement.push(line);
        if done {
            break;
        }
    }

    Ok(statement.join("\n"))
}

fn non_blank(sql: String) -> Option<String> {
    if sql.trim().is_empty() {
        None
    } else {
        Some(sql)
    }
}
