//! A selection-set algebra over GraphQL schemas.
//!
//! [`relations::TypeRelations`] precomputes how the composite types of a
//! [`schema::Schema`] relate to each other. A [`selection::SelectionTree`] is
//! a parsed, fragment-aware selection string and a
//! [`selection::SelectionView`] binds one to a type and a set of variables to
//! answer "which fields, on which types, with which arguments" questions.
//! [`variables`] builds the binders that compute those variables from
//! arguments and previously-fetched data.

pub mod ast;
mod file_reader;
pub mod loc;
pub mod relations;
pub mod schema;
pub mod selection;
#[cfg(test)]
mod test_utils;
pub mod types;
pub mod value;
pub mod variables;

pub use file_reader::ReadContentError;
pub use value::Value;
pub use value::ValueMap;
