//! Code generation module for dal-tool
//!
//! Renders the extracted table into a Go DAL file:
//! - Model struct with `orm`, `description` and `json` tags
//! - Service wrapper registered in the package table map
//! - CRUD methods delegating to `DBWrap`

use crate::{Result, TableDefinition};
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

pub mod go_dal;
pub mod templates;

pub use go_dal::{GeneratorOptions, GoDalGenerator};

/// Base trait for code generators
pub trait CodeGenerator {
    /// Generate code for an extracted table
    fn generate_table(&self, table: &TableDefinition) -> Result<String>;

    /// Extract a table from raw SQL and generate code for it
    fn generate_from_sql(&self, sql: &str) -> Result<String> {
        self.generate_table(&TableDefinition::from_sql(sql))
    }
}

/// Template-based code generator
pub struct TemplateGenerator {
    handlebars: Handlebars<'static>,
}

impl TemplateGenerator {
    /// Create a new template generator
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Generated Go is not HTML; values are emitted verbatim
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("pascal_case", Box::new(pascal_case_helper));

        Self { handlebars }
    }

    /// Register a template
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars.register_template_string(name, template)?;
        Ok(())
    }

    /// Render a template with context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        Ok(self.handlebars.render(template_name, context)?)
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pascal_case_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let param = h
        .param(0)
        .ok_or_else(|| handlebars::RenderError::new("pascal_case helper requires a parameter"))?;

    let input = param.value().as_str().ok_or_else(|| {
        handlebars::RenderError::new("pascal_case helper requires a string parameter")
    })?;

    out.write(&to_pascal_case(input))?;
    Ok(())
}

static SNAKE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|_)([a-z])").expect("codegen: Invalid segment regex"));

/// Upper-case every lowercase ASCII letter at the start of the string or
/// right after an underscore, dropping that underscore.
///
/// Purely lexical: `order_id` -> `OrderId`, `user_2fa` -> `User_2fa`,
/// `HTTPCode` stays `HTTPCode`.
pub fn to_pascal_case(input: &str) -> String {
    SNAKE_SEGMENT
        .replace_all(input, |caps: &Captures| caps[2].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("orders"), "Orders");
        assert_eq!(to_pascal_case("order_id"), "OrderId");
        assert_eq!(to_pascal_case("a_b_c"), "ABC");
        assert_eq!(to_pascal_case("_hidden"), "Hidden");
    }

    #[test]
    fn test_pascal_case_is_lexical() {
        assert_eq!(to_pascal_case("UnknownTable"), "UnknownTable");
        assert_eq!(to_pascal_case("user_2fa"), "User_2fa");
        assert_eq!(to_pascal_case("a__b"), "A_B");
        assert_eq!(to_pascal_case("XML_http"), "XMLHttp");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_helper_renders_pascal_case() {
        let mut generator = TemplateGenerator::new();
        generator
            .register_template("name", "{{pascal_case value}}")
            .unwrap();

        let rendered = generator
            .render("name", &serde_json::json!({ "value": "created_at" }))
            .unwrap();
        assert_eq!(rendered, "CreatedAt");
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let mut generator = TemplateGenerator::new();
        generator
            .register_template("tag", "description:\"{{text}}\"")
            .unwrap();

        let rendered = generator
            .render("tag", &serde_json::json!({ "text": "<a & \"b\">" }))
            .unwrap();
        assert_eq!(rendered, "description:\"<a & \"b\">\"");
    }
}
