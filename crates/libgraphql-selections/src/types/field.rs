use crate::ast;
use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}

impl Field {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        field: &ast::schema::Field,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_pos(
                file_path,
                field.position,
            ),
            name: field.name.to_owned(),
            parameters: field.arguments.iter()
                .map(|input_val| (
                    input_val.name.to_owned(),
                    Parameter::from_ast(file_path, input_val),
                ))
                .collect(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared arguments of this field, in definition order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The [`TypeAnnotation`] describing this field's return type.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
