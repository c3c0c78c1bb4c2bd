//! Template definitions for code generation
//!
//! The Go skeleton is fixed; only the package, struct name, table name and
//! rendered field lines vary.

/// One struct field line
pub const GO_FIELD_TEMPLATE: &str = include_str!("templates/go_field.hbs");

/// Package clause, imports, model struct, service wrapper and registration
pub const GO_MODEL_TEMPLATE: &str = include_str!("templates/go_model.hbs");

/// Query, QueryPage, QueryAll, Update, Insert and Delete methods
pub const GO_CRUD_TEMPLATE: &str = include_str!("templates/go_crud.hbs");
