//! Go DAL generator
//!
//! Generates one Go file per table with:
//! - A model struct whose fields carry `orm`, `description` and `json` tags
//! - A `<Struct>Service` wrapper bound to a `TableInfo` record
//! - An `init` block registering the record in `_TableMap`
//! - Query, QueryPage, QueryAll, Update, Insert and Delete methods

use crate::codegen::templates::{GO_CRUD_TEMPLATE, GO_FIELD_TEMPLATE, GO_MODEL_TEMPLATE};
use crate::codegen::{to_pascal_case, CodeGenerator, TemplateGenerator};
use crate::{ColumnInfo, Result, TableDefinition};
use serde::Serialize;

/// Go package clause used when none is configured
pub const DEFAULT_PACKAGE: &str = "table";

/// Knobs for the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Go package name written in the `package` clause
    pub package: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

/// Go DAL code generator
pub struct GoDalGenerator {
    template_generator: TemplateGenerator,
    options: GeneratorOptions,
}

impl GoDalGenerator {
    /// Create a generator with default options
    pub fn new() -> Result<Self> {
        Self::with_options(GeneratorOptions::default())
    }

    /// Create a generator with explicit options
    pub fn with_options(options: GeneratorOptions) -> Result<Self> {
        let mut template_generator = TemplateGenerator::new();

        template_generator.register_template("field", GO_FIELD_TEMPLATE)?;
        template_generator.register_template("model", GO_MODEL_TEMPLATE)?;
        template_generator.register_template("crud", GO_CRUD_TEMPLATE)?;

        Ok(Self {
            template_generator,
            options,
        })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Render the struct body, one field per documented column, separated by
    /// blank lines
    pub fn generate_fields(&self, columns: &[ColumnInfo]) -> Result<String> {
        let mut fields = Vec::with_capacity(columns.len());

        for column in columns {
            let context = FieldContext {
                name: &column.name,
                go_type: column.go_type().as_str(),
                comment: &column.comment,
            };
            let rendered = self.template_generator.render("field", &context)?;
            fields.push(rendered.trim_end_matches('\n').to_string());
        }

        Ok(fields.join("\n\n"))
    }
}

impl CodeGenerator for GoDalGenerator {
    fn generate_table(&self, table: &TableDefinition) -> Result<String> {
        let struct_name = to_pascal_case(&table.name);
        log::debug!(
            "Generating {} from table '{}' with {} column(s)",
            struct_name,
            table.name,
            table.columns.len()
        );

        let context = FileContext {
            package: &self.options.package,
            table_name: &table.name,
            struct_name: &struct_name,
            fields: self.generate_fields(&table.columns)?,
        };

        let model = self.template_generator.render("model", &context)?;
        let crud = self.template_generator.render("crud", &context)?;

        Ok(format!("{}\n\n\n{}\n", model.trim_end(), crud.trim_end()))
    }
}

/// Template context for one struct field
#[derive(Debug, Serialize)]
struct FieldContext<'a> {
    name: &'a str,
    go_type: &'static str,
    comment: &'a str,
}

/// Template context for the whole file
#[derive(Debug, Serialize)]
struct FileContext<'a> {
    package: &'a str,
    table_name: &'a str,
    struct_name: &'a str,
    fields: String,
}
