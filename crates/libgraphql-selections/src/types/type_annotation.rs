use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter) or
/// [`InputField`](crate::types::InputField).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn from_ast_type(ast_type: &ast::query::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::query::Type, nullable: bool) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                }),

            ast::query::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_owned(),
                }),

            ast::query::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type, .. })
                => inner_type.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    /// The name of the type at the bottom of all list/non-null wrappers.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().type_name()
    }

    /// Build a nullable (`nullable = true`) or non-null named annotation.
    pub fn named(type_name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_name: type_name.into(),
        })
    }

    pub fn list(inner_type: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner_type),
            nullable,
        })
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// This annotation with its outer-most non-null wrapper (if any) removed.
    pub fn to_nullable(&self) -> Self {
        let mut annot = self.clone();
        match &mut annot {
            Self::List(list_annot) => list_annot.nullable = true,
            Self::Named(named_annot) => named_annot.nullable = true,
        }
        annot
    }

    pub fn to_ast_type(&self) -> ast::query::Type {
        let inner = match self {
            Self::List(list_annot) => ast::query::Type::ListType(
                Box::new(list_annot.inner_type.to_ast_type()),
            ),
            Self::Named(named_annot) => ast::query::Type::NamedType(
                named_annot.type_name.to_owned(),
            ),
        };

        if self.nullable() {
            inner
        } else {
            ast::query::Type::NonNullType(Box::new(inner))
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(f, "[{}]", list_annot.inner_type)?,
            Self::Named(named_annot) => write!(f, "{}", named_annot.type_name)?,
        }
        if !self.nullable() {
            write!(f, "!")?;
        }
        Ok(())
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
