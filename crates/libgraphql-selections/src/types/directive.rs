use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Directive {
    Custom {
        def_location: loc::SourceLocation,
        name: String,
        params: IndexMap<String, Parameter>,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name.as_str(),
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }

    /// The declared arguments of this directive. Built-in directives report
    /// their standard argument lists.
    pub fn parameters(&self) -> IndexMap<String, Parameter> {
        let builtin_param = |name: &str, type_annotation: TypeAnnotation| (
            name.to_string(),
            Parameter {
                def_location: loc::SourceLocation::GraphQLBuiltIn,
                default_value: None,
                name: name.to_string(),
                type_annotation,
            },
        );

        match self {
            Self::Custom { params, .. } => params.clone(),
            Self::Deprecated => IndexMap::from([
                builtin_param("reason", TypeAnnotation::named("String", true)),
            ]),
            Self::Include | Self::Skip => IndexMap::from([
                builtin_param("if", TypeAnnotation::named("Boolean", false)),
            ]),
            Self::SpecifiedBy => IndexMap::from([
                builtin_param("url", TypeAnnotation::named("String", false)),
            ]),
        }
    }
}
