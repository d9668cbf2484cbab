use crate::ast;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A field selection together with the type condition it was selected
/// under, after fragment inlining and directive evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) field: Arc<ast::query::Field>,
    pub(crate) type_condition: String,
}
impl FieldSelection {
    pub(crate) fn new(field: ast::query::Field, type_condition: impl Into<String>) -> Self {
        Self {
            field: Arc::new(field),
            type_condition: type_condition.into(),
        }
    }

    pub fn field(&self) -> &ast::query::Field {
        &self.field
    }

    pub fn field_name(&self) -> &str {
        self.field.name.as_str()
    }

    /// The result key of this selection: its alias if it has one, otherwise
    /// its field name.
    pub fn selection_name(&self) -> &str {
        result_key(&self.field)
    }

    pub fn to_selected_field(&self) -> SelectedField {
        SelectedField {
            field_name: self.field_name().to_string(),
            selection_name: self.selection_name().to_string(),
            type_condition: self.type_condition.clone(),
        }
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
impl std::fmt::Display for FieldSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(alias) = &self.field.alias {
            write!(f, "{alias}:")?;
        }
        write!(f, "{}.{}", self.type_condition, self.field.name)
    }
}

/// The coordinates of a selected field: the type condition it applies to,
/// the schema field it reads and the key it is returned under.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SelectedField {
    pub(crate) field_name: String,
    pub(crate) selection_name: String,
    pub(crate) type_condition: String,
}
impl SelectedField {
    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn selection_name(&self) -> &str {
        self.selection_name.as_str()
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

pub(crate) fn result_key(field: &ast::query::Field) -> &str {
    field.alias.as_deref().unwrap_or(field.name.as_str())
}
