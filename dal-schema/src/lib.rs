//! dal-schema - CREATE TABLE extraction and Go DAL code generation
//!
//! This crate turns a single MySQL `CREATE TABLE` statement into a Go source
//! file containing a model struct, a service wrapper bound to a table
//! registry, and the CRUD method stubs that delegate to a `DBWrap` object.
//!
//! # Features
//!
//! - **Regex-based extraction** of the table name and documented columns
//! - **Fixed type mapping** from MySQL column types to Go types
//! - **Template-based generation** through embedded handlebars templates
//! - **Diagnostics** that flag suspicious input without changing the output
//!
//! # Example
//!
//! ```rust
//! use dal_schema::generate_from_sql;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sql = "CREATE TABLE shop.`orders` (`order_id` bigint COMMENT 'Order ID')";
//! let code = generate_from_sql(sql)?;
//! assert!(code.contains("type Orders struct"));
//! # Ok(())
//! # }
//! ```

use codegen::CodeGenerator;
use thiserror::Error;

pub mod codegen;
pub mod parser;
pub mod types;
pub mod validator;

pub use codegen::{GeneratorOptions, GoDalGenerator};
pub use parser::{extract_table_name, parse_columns};
pub use types::*;
pub use validator::TableValidator;

/// Generation errors
///
/// Extraction never fails; these only surface when the embedded templates
/// cannot be registered or rendered.
#[derive(Error, Debug)]
pub enum DalError {
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, DalError>;

/// Diagnostics collected for an extracted table
///
/// Warnings never change the generated code; they only point at input the
/// generator accepted silently.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a new empty validation result
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Add a validation warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Check if there are any validation warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
    }
}

/// Generate a Go DAL file from a `CREATE TABLE` statement with default options.
///
/// Any input text produces output; unrecognised input falls back to the
/// `UnknownTable` sentinel and an empty field list.
pub fn generate_from_sql(sql: &str) -> Result<String> {
    GoDalGenerator::new()?.generate_from_sql(sql)
}
