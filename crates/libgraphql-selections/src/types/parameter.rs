use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// A declared argument of a [`Field`](crate::types::Field) or a
/// [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    #[serde(skip)]
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_pos(
                file_path,
                input_val.position,
            ),
            default_value: input_val.default_value.clone(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
