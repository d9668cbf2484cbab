use crate::types::GraphQLType;

/// The category of a [`GraphQLType`], without its definition.
///
/// Selection analysis only cares about which categories can carry a
/// selection set and which may stand for more than one runtime object type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// The value `__Type.kind` reports for this category.
    pub fn introspection_kind(&self) -> &'static str {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::Scalar
                | Self::String => "SCALAR",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Object => "OBJECT",
            Self::Union => "UNION",
        }
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_composite() && *self != Self::InputObject
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool => Self::Bool,
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::Float => Self::Float,
            GraphQLType::ID => Self::ID,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Int => Self::Int,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::String => Self::String,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.introspection_kind())
    }
}
